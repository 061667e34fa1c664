//! Localized user-facing text.
//!
//! Validation rules and form flows only ever produce keys ([`Reason`],
//! [`Notice`], [`UiText`]); the text shown to the user is resolved here
//! through a [`Locale`]. Two locales ship with the storefront: English and
//! Vietnamese.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::validation::{FieldName, Reason};

/// Display language for the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Vietnamese => "vi",
        }
    }

    /// Form label shown above an input.
    pub fn label(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (Locale::English, FieldName::FirstName) => "First Name",
            (Locale::English, FieldName::LastName) => "Last Name",
            (Locale::English, FieldName::Email) => "Email Address",
            (Locale::English, FieldName::Password) => "Password",
            (Locale::English, FieldName::ConfirmPassword) => "Confirm Password",
            (Locale::English, FieldName::Terms) => "Terms & Conditions",
            (Locale::Vietnamese, FieldName::FirstName) => "Tên",
            (Locale::Vietnamese, FieldName::LastName) => "Họ",
            (Locale::Vietnamese, FieldName::Email) => "Địa chỉ email",
            (Locale::Vietnamese, FieldName::Password) => "Mật khẩu",
            (Locale::Vietnamese, FieldName::ConfirmPassword) => "Xác nhận mật khẩu",
            (Locale::Vietnamese, FieldName::Terms) => "Điều khoản & Điều kiện",
        }
    }

    /// Hint shown inside an empty input. The registration password uses
    /// [`UiText::NewPasswordPlaceholder`] instead.
    pub fn placeholder(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (Locale::English, FieldName::FirstName) => "Enter your first name",
            (Locale::English, FieldName::LastName) => "Enter your last name",
            (Locale::English, FieldName::Email) => "Enter your email",
            (Locale::English, FieldName::Password) => "Enter your password",
            (Locale::English, FieldName::ConfirmPassword) => "Confirm your password",
            (Locale::Vietnamese, FieldName::FirstName) => "Nhập tên của bạn",
            (Locale::Vietnamese, FieldName::LastName) => "Nhập họ của bạn",
            (Locale::Vietnamese, FieldName::Email) => "Nhập email của bạn",
            (Locale::Vietnamese, FieldName::Password) => "Nhập mật khẩu",
            (Locale::Vietnamese, FieldName::ConfirmPassword) => "Nhập lại mật khẩu",
            (_, FieldName::Terms) => "",
        }
    }

    /// Name of a field as used inside sentences ("Email is required").
    fn subject(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (Locale::English, FieldName::FirstName) => "First name",
            (Locale::English, FieldName::LastName) => "Last name",
            (Locale::English, FieldName::Email) => "Email",
            (Locale::English, FieldName::Password) => "Password",
            (Locale::English, FieldName::ConfirmPassword) => "Password confirmation",
            (Locale::English, FieldName::Terms) => "Terms acceptance",
            (Locale::Vietnamese, FieldName::FirstName) => "Tên",
            (Locale::Vietnamese, FieldName::LastName) => "Họ",
            (Locale::Vietnamese, FieldName::Email) => "Email",
            (Locale::Vietnamese, FieldName::Password) => "Mật khẩu",
            (Locale::Vietnamese, FieldName::ConfirmPassword) => "Xác nhận mật khẩu",
            (Locale::Vietnamese, FieldName::Terms) => "Điều khoản",
        }
    }

    /// Resolve a validation failure into the message shown under a field.
    pub fn reason(&self, field: FieldName, reason: &Reason) -> String {
        let subject = self.subject(field);
        match (self, reason) {
            (Locale::English, Reason::Required) => format!("{} is required", subject),
            (Locale::English, Reason::TooShort { min }) => {
                format!("{} must be at least {} characters", subject, min)
            }
            (Locale::English, Reason::InvalidEmail) => {
                "Please enter a valid email address".to_string()
            }
            (Locale::English, Reason::WeakPassword) => {
                "Password must contain uppercase, lowercase, and number".to_string()
            }
            (Locale::English, Reason::ConfirmRequired) => {
                "Please confirm your password".to_string()
            }
            (Locale::English, Reason::PasswordMismatch) => "Passwords do not match".to_string(),
            (Locale::English, Reason::TermsNotAccepted) => {
                "Please agree to the Terms & Conditions".to_string()
            }

            (Locale::Vietnamese, Reason::Required) => format!("{} là bắt buộc", subject),
            (Locale::Vietnamese, Reason::TooShort { min }) => {
                format!("{} phải có ít nhất {} ký tự", subject, min)
            }
            (Locale::Vietnamese, Reason::InvalidEmail) => {
                "Vui lòng nhập địa chỉ email hợp lệ".to_string()
            }
            (Locale::Vietnamese, Reason::WeakPassword) => {
                "Mật khẩu phải chứa chữ hoa, chữ thường và chữ số".to_string()
            }
            (Locale::Vietnamese, Reason::ConfirmRequired) => {
                "Vui lòng xác nhận mật khẩu".to_string()
            }
            (Locale::Vietnamese, Reason::PasswordMismatch) => "Mật khẩu không khớp".to_string(),
            (Locale::Vietnamese, Reason::TermsNotAccepted) => {
                "Vui lòng đồng ý với Điều khoản & Điều kiện".to_string()
            }
        }
    }

    /// Resolve a blocking notification (success, cart confirmation).
    pub fn notice(&self, notice: &Notice) -> String {
        match (self, notice) {
            (Locale::English, Notice::LoginSucceeded { email }) => {
                format!("Login successful! (This is a demo)\n\nEmail: {}", email)
            }
            (Locale::English, Notice::Registered { first_name, last_name, email }) => format!(
                "Registration successful! Welcome to SportZone!\n\nName: {} {}\nEmail: {}\n\n(This is a demo)",
                first_name, last_name, email
            ),
            (Locale::English, Notice::AddedToCart { name, price }) => {
                format!("Added to cart: {} ({})\n\n(This is a demo)", name, price)
            }

            (Locale::Vietnamese, Notice::LoginSucceeded { email }) => {
                format!("Đăng nhập thành công! (Đây là bản demo)\n\nEmail: {}", email)
            }
            (Locale::Vietnamese, Notice::Registered { first_name, last_name, email }) => format!(
                "Đăng ký thành công! Chào mừng bạn đến với SportZone!\n\nHọ tên: {} {}\nEmail: {}\n\n(Đây là bản demo)",
                last_name, first_name, email
            ),
            (Locale::Vietnamese, Notice::AddedToCart { name, price }) => {
                format!("Đã thêm vào giỏ hàng: {} ({})\n\n(Đây là bản demo)", name, price)
            }
        }
    }

    /// Static page copy.
    pub fn text(&self, key: UiText) -> &'static str {
        use UiText::*;
        match self {
            Locale::English => match key {
                Brand => "SportZone",
                NavHome => "Home",
                NavLogin => "Sign In",
                NavRegister => "Register",
                HeroTitle => "Fuel Your Performance",
                HeroSubtitle => "Discover premium sports equipment designed for champions.",
                FeaturedTitle => "Featured Products",
                FeaturedSubtitle => "Handpicked selection of our best-selling sports equipment",
                AddToCart => "Add to Cart",
                LoginTitle => "Welcome Back",
                LoginSubtitle => "Sign in to your account to continue shopping",
                LoginSubmit => "Sign In",
                LoginBusy => "Signing in...",
                RememberMe => "Remember me",
                NoAccount => "Don't have an account?",
                RegisterTitle => "Create Account",
                RegisterSubtitle => {
                    "Join SportZone and start shopping for premium sports equipment"
                }
                RegisterSubmit => "Create Account",
                RegisterBusy => "Creating account...",
                AgreeToTerms => "I agree to the Terms & Conditions",
                HaveAccount => "Already have an account?",
                ShowPassword => "Show password",
                HidePassword => "Hide password",
                Dismiss => "OK",
                NewPasswordPlaceholder => "Create a strong password",
                FeatureShippingTitle => "Free Shipping",
                FeatureShippingText => "On orders over $100",
                FeatureReturnsTitle => "Easy Returns",
                FeatureReturnsText => "30-day return policy",
                FeatureSecureTitle => "Secure Payment",
                FeatureSecureText => "100% secure checkout",
                FeatureQualityTitle => "Quality Guarantee",
                FeatureQualityText => "Premium products only",
                FooterTagline => {
                    "Your ultimate destination for premium sports equipment and athletic gear."
                }
                FooterLinksTitle => "Quick Links",
                FooterRights => "© 2024 SportZone. All rights reserved.",
            },
            Locale::Vietnamese => match key {
                Brand => "SportZone",
                NavHome => "Trang chủ",
                NavLogin => "Đăng nhập",
                NavRegister => "Đăng ký",
                HeroTitle => "Nâng Tầm Hiệu Suất",
                HeroSubtitle => "Khám phá dụng cụ thể thao cao cấp dành cho nhà vô địch.",
                FeaturedTitle => "Sản Phẩm Nổi Bật",
                FeaturedSubtitle => "Tuyển chọn những dụng cụ thể thao bán chạy nhất",
                AddToCart => "Thêm vào giỏ",
                LoginTitle => "Chào Mừng Trở Lại",
                LoginSubtitle => "Đăng nhập vào tài khoản để tiếp tục mua sắm",
                LoginSubmit => "Đăng nhập",
                LoginBusy => "Đang đăng nhập...",
                RememberMe => "Ghi nhớ đăng nhập",
                NoAccount => "Chưa có tài khoản?",
                RegisterTitle => "Tạo Tài Khoản",
                RegisterSubtitle => "Tham gia SportZone và bắt đầu mua sắm dụng cụ thể thao cao cấp",
                RegisterSubmit => "Tạo tài khoản",
                RegisterBusy => "Đang tạo tài khoản...",
                AgreeToTerms => "Tôi đồng ý với Điều khoản & Điều kiện",
                HaveAccount => "Đã có tài khoản?",
                ShowPassword => "Hiện mật khẩu",
                HidePassword => "Ẩn mật khẩu",
                Dismiss => "OK",
                NewPasswordPlaceholder => "Tạo mật khẩu mạnh",
                FeatureShippingTitle => "Miễn Phí Vận Chuyển",
                FeatureShippingText => "Cho đơn hàng trên $100",
                FeatureReturnsTitle => "Đổi Trả Dễ Dàng",
                FeatureReturnsText => "Chính sách đổi trả 30 ngày",
                FeatureSecureTitle => "Thanh Toán An Toàn",
                FeatureSecureText => "Thanh toán bảo mật 100%",
                FeatureQualityTitle => "Đảm Bảo Chất Lượng",
                FeatureQualityText => "Chỉ sản phẩm cao cấp",
                FooterTagline => "Điểm đến hàng đầu cho dụng cụ và trang phục thể thao cao cấp.",
                FooterLinksTitle => "Liên Kết Nhanh",
                FooterRights => "© 2024 SportZone. Bảo lưu mọi quyền.",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "vi" | "vietnamese" => Ok(Locale::Vietnamese),
            other => Err(StorefrontError::Config(format!("unknown locale '{}'", other))),
        }
    }
}

/// Blocking notification raised by a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoginSucceeded {
        email: String,
    },
    Registered {
        first_name: String,
        last_name: String,
        email: String,
    },
    AddedToCart {
        name: String,
        price: String,
    },
}

/// Keys for static page copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    Brand,
    NavHome,
    NavLogin,
    NavRegister,
    HeroTitle,
    HeroSubtitle,
    FeaturedTitle,
    FeaturedSubtitle,
    AddToCart,
    LoginTitle,
    LoginSubtitle,
    LoginSubmit,
    LoginBusy,
    RememberMe,
    NoAccount,
    RegisterTitle,
    RegisterSubtitle,
    RegisterSubmit,
    RegisterBusy,
    AgreeToTerms,
    HaveAccount,
    ShowPassword,
    HidePassword,
    Dismiss,
    NewPasswordPlaceholder,
    FeatureShippingTitle,
    FeatureShippingText,
    FeatureReturnsTitle,
    FeatureReturnsText,
    FeatureSecureTitle,
    FeatureSecureText,
    FeatureQualityTitle,
    FeatureQualityText,
    FooterTagline,
    FooterLinksTitle,
    FooterRights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_uses_field_subject() {
        let en = Locale::English;
        assert_eq!(en.reason(FieldName::Email, &Reason::Required), "Email is required");
        assert_eq!(
            en.reason(FieldName::FirstName, &Reason::Required),
            "First name is required"
        );
        assert_eq!(
            Locale::Vietnamese.reason(FieldName::Password, &Reason::Required),
            "Mật khẩu là bắt buộc"
        );
    }

    #[test]
    fn test_too_short_message_includes_minimum() {
        assert_eq!(
            Locale::English.reason(FieldName::Password, &Reason::TooShort { min: 6 }),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            Locale::Vietnamese.reason(FieldName::Password, &Reason::TooShort { min: 6 }),
            "Mật khẩu phải có ít nhất 6 ký tự"
        );
    }

    #[test]
    fn test_mismatch_message() {
        assert_eq!(
            Locale::English.reason(FieldName::ConfirmPassword, &Reason::PasswordMismatch),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Locale::English.placeholder(FieldName::Email), "Enter your email");
        assert_eq!(
            Locale::Vietnamese.placeholder(FieldName::ConfirmPassword),
            "Nhập lại mật khẩu"
        );
        assert_eq!(Locale::English.placeholder(FieldName::Terms), "");
        assert_eq!(
            Locale::English.text(UiText::NewPasswordPlaceholder),
            "Create a strong password"
        );
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!(" VI ".parse::<Locale>().unwrap(), Locale::Vietnamese);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_uses_codes() {
        let json = serde_json::to_string(&Locale::Vietnamese).unwrap();
        assert_eq!(json, "\"vi\"");
        let back: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Locale::English);
    }

    #[test]
    fn test_login_notice_carries_email() {
        let text = Locale::English.notice(&Notice::LoginSucceeded {
            email: "a@b.com".to_string(),
        });
        assert!(text.starts_with("Login successful!"));
        assert!(text.contains("a@b.com"));
    }
}
