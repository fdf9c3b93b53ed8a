use crate::utils::error::{IngestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> IngestError {
    IngestError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// DynamoDB table names: 3 to 255 characters of `[A-Za-z0-9_.-]`.
pub fn validate_table_name(field_name: &str, table_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, table_name)?;

    if table_name.len() < 3 || table_name.len() > 255 {
        return Err(invalid(
            field_name,
            table_name,
            "Table name must be between 3 and 255 characters",
        ));
    }

    if !table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(invalid(
            field_name,
            table_name,
            "Table name can only contain letters, numbers, underscores, hyphens, and dots",
        ));
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            field_name,
            region,
            "AWS region can only contain lowercase letters, numbers, and hyphens",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint_url", "https://dynamodb.eu-west-1.amazonaws.com").is_ok());
        assert!(validate_url("endpoint_url", "http://localhost:8000").is_ok());
        assert!(validate_url("endpoint_url", "").is_err());
        assert!(validate_url("endpoint_url", "invalid-url").is_err());
        assert!(validate_url("endpoint_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store_dir", "./output").is_ok());
        assert!(validate_path("store_dir", "").is_err());
        assert!(validate_path("store_dir", "out\0put").is_err());
    }

    #[test]
    fn test_validate_table_name() {
        assert!(validate_table_name("table_name", "Customers").is_ok());
        assert!(validate_table_name("table_name", "marketing-optins.v2_prod").is_ok());
        assert!(validate_table_name("table_name", "ab").is_err());
        assert!(validate_table_name("table_name", "   ").is_err());
        assert!(validate_table_name("table_name", "bad name").is_err());
        assert!(validate_table_name("table_name", &"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "ap-southeast-2").is_ok());
        assert!(validate_aws_region("region", "EU-WEST-1").is_err());
        assert!(validate_aws_region("region", "").is_err());
    }
}
