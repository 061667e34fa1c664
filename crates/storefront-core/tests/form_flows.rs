//! End-to-end form and catalog flows
//!
//! These drive the view-models the way the UI does: keystrokes, blurs and
//! submits, checking what would be visible after each step.

use storefront_core::{
    featured_products, render_catalog, CatalogView, FieldName, FieldPhase, Locale, LoginForm,
    Notice, Reason, RegisterForm, SubmitOutcome, ValidationPolicy,
};

fn policy() -> ValidationPolicy {
    ValidationPolicy::default()
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_login_success_leaves_no_error_text() {
    let mut form = LoginForm::new(&policy(), Locale::English);

    form.input(FieldName::Email, "a@b.com");
    form.blur(FieldName::Email);
    form.input(FieldName::Password, "secret");
    form.blur(FieldName::Password);

    let outcome = form.submit();
    let success = match outcome {
        SubmitOutcome::Success(success) => success,
        other => panic!("expected success, got {:?}", other),
    };

    assert_eq!(form.state().error(FieldName::Email), None);
    assert_eq!(form.state().error(FieldName::Password), None);
    assert_eq!(
        success.notice(),
        Notice::LoginSucceeded {
            email: "a@b.com".to_string()
        }
    );
}

#[test]
fn test_login_error_cleared_on_typing_then_revalidated_on_blur() {
    let mut form = LoginForm::new(&policy(), Locale::English);

    form.input(FieldName::Email, "foo@bar");
    form.blur(FieldName::Email);
    assert_eq!(
        form.state().error(FieldName::Email),
        Some("Please enter a valid email address")
    );

    // Still invalid, but the error disappears as soon as the user types
    form.input(FieldName::Email, "foo@bar.");
    assert_eq!(form.state().error(FieldName::Email), None);
    assert_eq!(form.state().phase(FieldName::Email), FieldPhase::Pending);

    form.blur(FieldName::Email);
    assert!(form.state().error(FieldName::Email).is_some());

    form.input(FieldName::Email, "foo@bar.com");
    form.blur(FieldName::Email);
    assert_eq!(form.state().error(FieldName::Email), None);
    assert_eq!(form.state().phase(FieldName::Email), FieldPhase::Valid);
}

#[test]
fn test_login_failure_blocks_and_keeps_errors() {
    let mut form = LoginForm::new(&policy(), Locale::English);
    form.input(FieldName::Email, "a@b.com");
    form.input(FieldName::Password, "12345");

    match form.submit() {
        SubmitOutcome::ValidationFailed(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, FieldName::Password);
            assert_eq!(errors[0].reason, Reason::TooShort { min: 6 });
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(!form.state().is_submitting());
    assert!(form.state().error(FieldName::Password).is_some());
}

// ============================================================================
// Registration
// ============================================================================

fn fill(form: &mut RegisterForm, password: &str, confirm: &str) {
    form.input(FieldName::FirstName, "Minh");
    form.input(FieldName::LastName, "Nguyễn");
    form.input(FieldName::Email, "minh@example.vn");
    form.input(FieldName::Password, password);
    form.input(FieldName::ConfirmPassword, confirm);
}

#[test]
fn test_registration_password_policy() {
    for (password, expected) in [
        ("short1", Some(Reason::TooShort { min: 8 })),
        ("alllowercase1", Some(Reason::WeakPassword)),
        ("Valid1Pass", None),
    ] {
        let mut form = RegisterForm::new(&policy(), Locale::English);
        form.input(FieldName::Password, password);
        form.blur(FieldName::Password);

        let phase = form.state().phase(FieldName::Password);
        match expected {
            Some(reason) => assert_eq!(phase, FieldPhase::Invalid(reason), "{}", password),
            None => assert_eq!(phase, FieldPhase::Valid, "{}", password),
        }
    }
}

#[test]
fn test_mismatch_surfaces_on_password_change() {
    let mut form = RegisterForm::new(&policy(), Locale::English);
    fill(&mut form, "Abc12345", "Abc1234");
    form.blur(FieldName::ConfirmPassword);
    assert_eq!(
        form.state().error(FieldName::ConfirmPassword),
        Some("Passwords do not match")
    );

    // User fixes the confirmation, then changes the password again
    form.input(FieldName::ConfirmPassword, "Abc12345");
    form.blur(FieldName::ConfirmPassword);
    assert_eq!(form.state().error(FieldName::ConfirmPassword), None);

    form.input(FieldName::Password, "Xyz12345");
    assert_eq!(
        form.state().error(FieldName::ConfirmPassword),
        Some("Passwords do not match")
    );
}

#[test]
fn test_terms_is_the_only_failure() {
    let mut form = RegisterForm::new(&policy(), Locale::English);
    fill(&mut form, "Abc12345", "Abc12345");

    let outcome = form.submit();
    let blocking = outcome.blocking_errors();
    assert_eq!(blocking.len(), 1);
    assert_eq!(
        blocking[0].message(Locale::English),
        "Please agree to the Terms & Conditions"
    );
    match &outcome {
        SubmitOutcome::ValidationFailed(errors) => assert_eq!(errors.len(), 1),
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(form.state().errors().is_empty());
}

#[test]
fn test_registration_completes_after_terms_accepted() {
    let mut form = RegisterForm::new(&policy(), Locale::Vietnamese);
    fill(&mut form, "Abc12345", "Abc12345");
    assert!(!form.submit().is_success());

    form.set_terms_accepted(true);
    let outcome = form.submit();
    assert!(outcome.is_success());
    assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitting);

    form.finish_submit();
    assert!(!form.state().is_submitting());
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_renders_every_product() {
    for locale in [Locale::English, Locale::Vietnamese] {
        let products = featured_products(locale);
        let mut view = CatalogView::new("productsGrid");
        let cards = view.render(&products).unwrap();

        assert_eq!(cards.len(), products.len());
        let alts: Vec<_> = cards.iter().map(|c| c.image_alt.as_str()).collect();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(alts, names);
    }
}

#[test]
fn test_empty_catalog_renders_nothing() {
    assert!(render_catalog(&[]).unwrap().is_empty());
}
