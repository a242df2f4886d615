//! Pin lookup by package name

use tracing::debug;

use crate::lockfile::error::LookupError;
use crate::lockfile::types::{Lockfile, Pin};

/// Pin recorded for `package_name`
pub fn lookup_pin<'a>(
    lockfile: &'a Lockfile,
    package_name: &str,
) -> Result<&'a Pin, LookupError> {
    let pin = lockfile
        .find_pin(package_name)
        .ok_or_else(|| LookupError::NotFound(package_name.to_string()))?;

    debug!("Found pin for {}: {:?}", package_name, pin.version);
    Ok(pin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lockfile::types::LockfileLayout;
    use rstest::rstest;

    fn lockfile() -> Lockfile {
        Lockfile {
            layout: LockfileLayout::V1,
            pins: vec![
                Pin {
                    package: "swift-bson".to_string(),
                    version: Some("1.2.3".to_string()),
                },
                Pin {
                    package: "mongo-swift-driver".to_string(),
                    version: Some("1.3.1".to_string()),
                },
                Pin {
                    package: "vapor".to_string(),
                    version: None,
                },
            ],
        }
    }

    #[rstest]
    #[case("swift-bson", Ok(Some("1.2.3")))]
    #[case("mongo-swift-driver", Ok(Some("1.3.1")))]
    #[case("vapor", Ok(None))]
    #[case("swift-nio", Err(LookupError::NotFound("swift-nio".to_string())))]
    #[case("", Err(LookupError::NotFound(String::new())))]
    fn lookup_pin_returns_expected(
        #[case] package_name: &str,
        #[case] expected: Result<Option<&str>, LookupError>,
    ) {
        let lockfile = lockfile();

        let result = lookup_pin(&lockfile, package_name).map(|pin| pin.version.as_deref());

        assert_eq!(result, expected);
    }

    #[test]
    fn lookup_error_message_matches_cli_output() {
        assert_eq!(
            LookupError::NotFound("swift-nio".to_string()).to_string(),
            "No package named swift-nio"
        );
    }
}
