//! Kiosk configuration.
//!
//! Holds the address of the package that defines the transfer policy
//! module. On every public Sui network that is the framework at `0x2`;
//! local networks and tests may point it elsewhere.

use serde::{Deserialize, Serialize};

use sui_types::{SuiAddress, SUI_FRAMEWORK_ADDRESS};

use crate::error::KioskError;

/// Module defining `TransferPolicy<T>` and `TransferPolicyCap<T>`.
pub const TRANSFER_POLICY_MODULE: &str = "transfer_policy";

/// Module defining `public_share_object`.
pub const TRANSFER_MODULE: &str = "transfer";

/// Where the kiosk Move modules live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KioskConfig {
    /// Package that publishes `transfer_policy` and `transfer`.
    pub framework_package: SuiAddress,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            framework_package: SUI_FRAMEWORK_ADDRESS,
        }
    }
}

impl KioskConfig {
    /// Build a config for a framework published at `package` (hex).
    pub fn with_framework_package(package: &str) -> Result<Self, KioskError> {
        let config = KioskConfig {
            framework_package: SuiAddress::from_hex(package)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a config from JSON, e.g. `{"frameworkPackage": "0x2"}`.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, KioskError> {
        let config: KioskConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero package address, which no module can live at.
    pub fn validate(&self) -> Result<(), KioskError> {
        if self.framework_package == SuiAddress::ZERO {
            return Err(KioskError::InvalidConfig(
                "framework package address must not be 0x0".into(),
            ));
        }
        Ok(())
    }

    /// `package::module::function` with the package in short form.
    pub fn target(&self, module: &str, function: &str) -> String {
        format!("{}::{}::{}", self.framework_package.to_short_hex(), module, function)
    }

    /// A function of the `transfer_policy` module.
    pub fn transfer_policy_target(&self, function: &str) -> String {
        self.target(TRANSFER_POLICY_MODULE, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_framework() {
        let config = KioskConfig::default();
        assert_eq!(config.transfer_policy_target("new"), "0x2::transfer_policy::new");
        assert_eq!(
            config.target(TRANSFER_MODULE, "public_share_object"),
            "0x2::transfer::public_share_object"
        );
    }

    #[test]
    fn test_from_json() {
        let config = KioskConfig::from_json(r#"{"frameworkPackage": "0xdee9"}"#).unwrap();
        assert_eq!(config.transfer_policy_target("withdraw"), "0xdee9::transfer_policy::withdraw");

        let defaulted = KioskConfig::from_json("{}").unwrap();
        assert_eq!(defaulted, KioskConfig::default());
    }

    #[test]
    fn test_rejects_zero_and_malformed() {
        assert!(matches!(
            KioskConfig::from_json(r#"{"frameworkPackage": "0x0"}"#),
            Err(KioskError::InvalidConfig(_))
        ));
        assert!(matches!(
            KioskConfig::from_json(r#"{"frameworkPackage": "nope"}"#),
            Err(KioskError::Json(_))
        ));
        assert!(matches!(
            KioskConfig::with_framework_package("0xzz"),
            Err(KioskError::Types(_))
        ));
    }
}
