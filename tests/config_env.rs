//! Environment overrides for `AppConfig::load_from`.
//!
//! Kept in its own test binary since it mutates the process environment.

use limitform::AppConfig;
use rust_decimal_macros::dec;

#[test]
fn env_vars_override_files_and_defaults() {
    let dir = std::env::temp_dir().join(format!("limitform-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[account]\nquote_balance = \"500\"\nbase_balance = \"2\"\n",
    )
    .unwrap();

    std::env::set_var("LIMITFORM_ACCOUNT__QUOTE_BALANCE", "250");
    let config = AppConfig::load_from(&dir);
    std::env::remove_var("LIMITFORM_ACCOUNT__QUOTE_BALANCE");
    let _ = std::fs::remove_dir_all(&dir);

    let config = config.unwrap();
    assert_eq!(config.account.quote_balance, dec!(250));
    assert_eq!(config.account.base_balance, dec!(2));
    assert_eq!(config.market.base, "BTC");
    assert!(config.validate().is_ok());
}
