//! Global CSS styles for the SportZone storefront.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --brand: #ff5722;
  --brand-dark: #e64a19;
  --brand-glow: rgba(255, 87, 34, 0.25);

  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f5f6f8;
  --border: #e0e3e8;

  /* TEXT */
  --text-primary: #1c1f24;
  --text-secondary: #5b6270;
  --text-inverse: #ffffff;

  /* SEMANTIC */
  --danger: #e53935;
  --danger-bg: rgba(229, 57, 53, 0.08);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 2rem;
  --text-2xl: 3rem;

  --radius: 10px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface-muted);
  line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-brand {
  font-size: var(--text-lg);
  font-weight: 800;
  color: var(--brand);
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover, .nav-link.active { color: var(--brand); }

/* === Buttons === */
.btn {
  display: inline-block;
  border: 2px solid transparent;
  border-radius: var(--radius);
  padding: 0.6rem 1.25rem;
  font-weight: 600;
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:disabled { opacity: 0.6; cursor: not-allowed; }

.btn-primary { background: var(--brand); color: var(--text-inverse); }
.btn-primary:hover:not(:disabled) { background: var(--brand-dark); box-shadow: 0 4px 14px var(--brand-glow); }

.btn-secondary { background: var(--text-primary); color: var(--text-inverse); }
.btn-outline { background: transparent; border-color: var(--brand); color: var(--brand); }

.btn-small { padding: 0.35rem 0.8rem; font-size: var(--text-sm); }
.btn-large { padding: 0.9rem 2rem; font-size: var(--text-lg); }
.btn-block { display: block; width: 100%; }

/* === Hero === */
.hero {
  padding: 5rem 2rem;
  background: linear-gradient(135deg, #1c1f24 0%, #3a2a24 100%);
  color: var(--text-inverse);
}

.hero-content { max-width: 720px; margin: 0 auto; text-align: center; }
.hero-title { font-size: var(--text-2xl); font-weight: 800; }
.hero-subtitle { margin: 1rem 0 2rem; color: rgba(255, 255, 255, 0.8); }

/* === Featured Products === */
.featured-products { padding: 4rem 2rem; max-width: 1200px; margin: 0 auto; }
.section-header { text-align: center; margin-bottom: 2.5rem; }
.section-title { font-size: var(--text-xl); }
.section-subtitle { color: var(--text-secondary); }

.products-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.product-card {
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
  transition: transform var(--transition-fast);
}

.product-card:hover { transform: translateY(-4px); }

.product-image { position: relative; aspect-ratio: 1 / 1; background: var(--surface-muted); }
.product-image img { width: 100%; height: 100%; object-fit: cover; display: block; }

.product-category {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  background: var(--brand);
  color: var(--text-inverse);
  font-size: var(--text-sm);
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
}

.product-info { padding: 1rem; }
.product-name { font-size: var(--text-base); margin-bottom: 0.75rem; }

.product-footer { display: flex; align-items: center; justify-content: space-between; }
.product-price { font-size: var(--text-lg); font-weight: 700; color: var(--brand); }

.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.hero-actions .btn-outline { color: var(--text-inverse); border-color: var(--text-inverse); }

/* === Features === */
.features { background: var(--surface); padding: 3rem 2rem; }

.features-grid {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 2rem;
  text-align: center;
}

.feature-icon { font-size: 2.5rem; margin-bottom: 0.75rem; }
.feature-item p { color: var(--text-secondary); font-size: var(--text-sm); }

/* === Footer === */
.footer { background: var(--text-primary); color: rgba(255, 255, 255, 0.8); padding: 3rem 2rem 1.5rem; }

.footer-content {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2rem;
}

.footer-title { color: var(--brand); font-size: var(--text-lg); margin-bottom: 0.5rem; }
.footer-heading { color: var(--text-inverse); margin-bottom: 0.75rem; }
.footer-links { list-style: none; display: flex; flex-direction: column; gap: 0.4rem; }
.footer-links a:hover { color: var(--brand); }

.footer-bottom {
  max-width: 1200px;
  margin: 2rem auto 0;
  padding-top: 1.5rem;
  border-top: 1px solid rgba(255, 255, 255, 0.15);
  text-align: center;
  font-size: var(--text-sm);
}

/* === Auth Forms === */
.auth-page { display: flex; justify-content: center; padding: 3rem 1rem; }

.auth-card {
  width: 100%;
  max-width: 520px;
  background: var(--surface);
  border-radius: var(--radius);
  padding: 2.5rem;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.08);
}

.auth-header { text-align: center; margin-bottom: 2rem; }
.auth-header p { color: var(--text-secondary); }

.auth-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

.form-input-group { display: flex; flex-direction: column; gap: 0.35rem; }
.form-label { font-weight: 600; font-size: var(--text-sm); }
.form-label .required { color: var(--danger); margin-left: 0.2rem; }

.input-wrapper { position: relative; }

.form-input {
  width: 100%;
  padding: 0.7rem 0.9rem;
  border: 1.5px solid var(--border);
  border-radius: var(--radius);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input:disabled { background: var(--surface-muted); cursor: not-allowed; }

.form-input-group.focused .form-input { border-color: var(--brand); box-shadow: 0 0 0 3px var(--brand-glow); }
.form-input-group.error .form-input { border-color: var(--danger); background: var(--danger-bg); }

.password-toggle {
  position: absolute;
  right: 0.6rem;
  top: 50%;
  transform: translateY(-50%);
  border: none;
  background: transparent;
  cursor: pointer;
}

.error-message { color: var(--danger); font-size: var(--text-sm); }

.form-options { display: flex; justify-content: space-between; align-items: center; }
.checkbox-label { display: flex; gap: 0.5rem; align-items: center; font-size: var(--text-sm); }

.auth-footer { margin-top: 1.5rem; text-align: center; color: var(--text-secondary); }
.auth-link { color: var(--brand); font-weight: 600; }

/* === Notice Modal === */
.notice-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.notice-modal {
  background: var(--surface);
  border-radius: var(--radius);
  padding: 2rem;
  max-width: 420px;
  width: 90%;
  box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
}

.notice-line { min-height: 1.2em; }
.notice-dismiss { margin-top: 1.5rem; width: 100%; }

@media (max-width: 640px) {
  .form-row { grid-template-columns: 1fr; }
  .footer-content { grid-template-columns: 1fr; }
  .hero-title { font-size: var(--text-xl); }
}
"#;
