//! Product type values accepted by the catalog.
//!
//! The API recognizes a small fixed set of product types. The SDK does not
//! enforce the set anywhere (payloads are passed through verbatim), but
//! parsing an unsupported value yields a descriptive error listing the
//! allowed types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A product type recognized by the catalog.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ProductType;
///
/// let physical: ProductType = "physical".parse().unwrap();
/// assert_eq!(physical.as_str(), "physical");
///
/// let error = "virtual".parse::<ProductType>().unwrap_err();
/// assert!(error.to_string().contains("physical, digital"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// A physical product that is shipped.
    Physical,
    /// A digital product that is downloaded.
    Digital,
}

impl ProductType {
    /// All product types recognized by the catalog.
    pub const ALL: &'static [Self] = &[Self::Physical, Self::Digital];

    /// Returns the wire value for this product type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = UnsupportedProductTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == value)
            .copied()
            .ok_or_else(|| UnsupportedProductTypeError {
                supplied: value.to_string(),
            })
    }
}

/// Error returned when a supplied product type is not recognized.
///
/// The message names the offending value and lists the allowed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("\"{supplied}\" is not a valid product type. Supported types include {}.", supported_list())]
pub struct UnsupportedProductTypeError {
    /// The unsupported value that was supplied.
    pub supplied: String,
}

fn supported_list() -> String {
    ProductType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
