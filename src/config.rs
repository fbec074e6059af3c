use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{Market, Precision};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub market: MarketConfig,
    pub account: AccountConfig,
    pub limits: LimitsConfig,
    pub precision: PrecisionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketConfig {
    /// Traded asset symbol (e.g., "BTC")
    pub base: String,
    /// Pricing asset symbol (e.g., "USDT")
    pub quote: String,
    /// Flat fee rate (e.g., 0.015 = 1.5%)
    pub fee_rate: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountConfig {
    /// Available base-asset balance
    pub base_balance: Decimal,
    /// Available quote-asset balance
    pub quote_balance: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub amount_min: Decimal,
    pub amount_max: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrecisionConfig {
    /// Fractional digits for Price
    pub price: u32,
    /// Fractional digits for the base asset (Amount)
    pub base: u32,
    /// Fractional digits for the quote asset (Total)
    pub quote: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for the terminal UI's log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Largest digit count a field may be configured with
const MAX_PRECISION: u32 = 18;

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("market.base", "BTC")?
            .set_default("market.quote", "USDT")?
            .set_default("market.fee_rate", "0.015")?
            .set_default("account.base_balance", "1")?
            .set_default("account.quote_balance", "100")?
            .set_default("limits.price_min", "87510.22")?
            .set_default("limits.price_max", "88373.72")?
            .set_default("limits.amount_min", "0.000001")?
            .set_default("limits.amount_max", "10")?
            .set_default("precision.price", 2)?
            .set_default("precision.base", 6)?
            .set_default("precision.quote", 2)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("LIMITFORM_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (LIMITFORM_ACCOUNT__QUOTE_BALANCE, etc.)
            .add_source(
                Environment::with_prefix("LIMITFORM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Built-in configuration matching the demo account
    pub fn default_config() -> Self {
        use rust_decimal_macros::dec;

        Self {
            market: MarketConfig {
                base: "BTC".to_string(),
                quote: "USDT".to_string(),
                fee_rate: dec!(0.015),
            },
            account: AccountConfig {
                base_balance: dec!(1),
                quote_balance: dec!(100),
            },
            limits: LimitsConfig {
                price_min: dec!(87510.22),
                price_max: dec!(88373.72),
                amount_min: dec!(0.000001),
                amount_max: dec!(10),
            },
            precision: PrecisionConfig {
                price: 2,
                base: 6,
                quote: 2,
            },
            logging: LoggingConfig::default(),
        }
    }

    pub fn market(&self) -> Market {
        Market::new(self.market.base.clone(), self.market.quote.clone())
    }

    pub fn precision(&self) -> Precision {
        Precision {
            price: self.precision.price,
            base: self.precision.base,
            quote: self.precision.quote,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        // Market
        if self.market.base.trim().is_empty() || self.market.quote.trim().is_empty() {
            errors.push("market.base and market.quote must be non-empty".to_string());
        } else if self.market.base == self.market.quote {
            errors.push(format!(
                "market.base and market.quote must differ (both are {})",
                self.market.base
            ));
        }

        if self.market.fee_rate < Decimal::ZERO || self.market.fee_rate >= Decimal::ONE {
            errors.push("fee_rate must be in [0, 1)".to_string());
        }

        // Account
        if self.account.base_balance < Decimal::ZERO {
            errors.push("account.base_balance cannot be negative".to_string());
        }

        if self.account.quote_balance < Decimal::ZERO {
            errors.push("account.quote_balance cannot be negative".to_string());
        }

        // Limits
        if self.limits.price_min <= Decimal::ZERO {
            errors.push("limits.price_min must be positive".to_string());
        }

        if self.limits.price_min > self.limits.price_max {
            errors.push(format!(
                "limits.price_min ({}) exceeds limits.price_max ({})",
                self.limits.price_min, self.limits.price_max
            ));
        }

        if self.limits.amount_min <= Decimal::ZERO {
            errors.push("limits.amount_min must be positive".to_string());
        }

        if self.limits.amount_min > self.limits.amount_max {
            errors.push(format!(
                "limits.amount_min ({}) exceeds limits.amount_max ({})",
                self.limits.amount_min, self.limits.amount_max
            ));
        }

        // Precision
        for (name, digits) in [
            ("precision.price", self.precision.price),
            ("precision.base", self.precision.base),
            ("precision.quote", self.precision.quote),
        ] {
            if digits > MAX_PRECISION {
                errors.push(format!("{name} must be at most {MAX_PRECISION}, got {digits}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
