use crate::utils::error::{LookupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A1-style range reference, e.g. `report_02!A:G` or `allowlist!A2:A`.
pub fn validate_sheet_range(field_name: &str, range: &str) -> Result<()> {
    validate_non_empty_string(field_name, range)?;

    let columns = match range.split_once('!') {
        Some((sheet, columns)) if !sheet.is_empty() => columns,
        _ => {
            return Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: range.to_string(),
                reason: "Range must be of the form <sheet>!<columns>".to_string(),
            })
        }
    };

    if columns.is_empty() || !columns.chars().all(|c| c.is_ascii_alphanumeric() || c == ':') {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: range.to_string(),
            reason: "Column reference contains invalid characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| LookupError::MissingConfigError {
            field: field_name.to_string(),
        })
}
