use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// A product record as returned by the backend. The client only ever holds a
/// cached copy; every field except the id and title may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub product_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<String>,
}

impl Product {
    /// Trimmed id, or `None` when the backend handed us a blank one.
    pub fn id(&self) -> Option<ProductId> {
        ProductId::parse(&self.product_id)
    }

    pub fn price_or_zero(&self) -> f64 {
        self.product_price.unwrap_or(0.0)
    }

    pub fn category_label(&self) -> &str {
        match self.product_category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => "N/A",
        }
    }

    pub fn description_or_default(&self) -> &str {
        match self.product_description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => "No description",
        }
    }
}

/// Values a user submits from the create/edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFormData {
    pub product_title: String,
    pub product_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
}

impl ProductFormData {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.product_title.trim().chars().count() < MIN_TITLE_LENGTH {
            return Err(ProductError::TitleTooShort);
        }

        if !self.product_price.is_finite() || self.product_price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        if self
            .product_description
            .as_deref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LENGTH)
        {
            return Err(ProductError::DescriptionTooLong);
        }

        if let Some(image) = self.product_image.as_deref().filter(|i| !i.trim().is_empty()) {
            let parsed = url::Url::parse(image.trim()).map_err(|_| ProductError::InvalidImageUrl)?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ProductError::InvalidImageUrl);
            }
        }

        Ok(())
    }
}

/// Body of an update request: the form values plus the id of the record
/// being edited. The id never comes from the form itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductPayload {
    pub product_id: String,
    #[serde(flatten)]
    pub values: ProductFormData,
}

impl UpdateProductPayload {
    pub fn new(product_id: &ProductId, values: ProductFormData) -> Self {
        Self {
            product_id: product_id.as_str().to_string(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> ProductFormData {
        ProductFormData {
            product_title: "Desk lamp".to_string(),
            product_price: 25.0,
            product_description: None,
            product_image: Some("https://cdn.example.com/lamp.png".to_string()),
            product_category: Some("Lighting".to_string()),
        }
    }

    #[test]
    fn should_decode_product_when_optional_fields_are_missing() {
        let product: Product = serde_json::from_value(json!({
            "product_id": "p-1",
            "product_title": "Chair",
            "unknown_field": true,
        }))
        .unwrap();

        assert_eq!(product.price_or_zero(), 0.0);
        assert_eq!(product.category_label(), "N/A");
        assert_eq!(product.description_or_default(), "No description");
    }

    #[test]
    fn should_expose_trimmed_id() {
        let product: Product =
            serde_json::from_value(json!({"product_id": " p-9 ", "product_title": "Chair"}))
                .unwrap();

        assert_eq!(product.id().unwrap().as_str(), "p-9");
    }

    #[test]
    fn should_accept_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn should_reject_form_when_title_is_too_short() {
        let form = ProductFormData {
            product_title: " ab ".to_string(),
            ..valid_form()
        };

        assert!(matches!(form.validate(), Err(ProductError::TitleTooShort)));
    }

    #[test]
    fn should_reject_form_when_price_is_negative() {
        let form = ProductFormData {
            product_price: -1.0,
            ..valid_form()
        };

        assert!(matches!(form.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_form_when_description_is_too_long() {
        let form = ProductFormData {
            product_description: Some("x".repeat(MAX_DESCRIPTION_LENGTH + 1)),
            ..valid_form()
        };

        assert!(matches!(form.validate(), Err(ProductError::DescriptionTooLong)));
    }

    #[test]
    fn should_reject_form_when_image_is_not_http() {
        let form = ProductFormData {
            product_image: Some("ftp://example.com/a.png".to_string()),
            ..valid_form()
        };

        assert!(matches!(form.validate(), Err(ProductError::InvalidImageUrl)));
    }

    #[test]
    fn should_reject_form_when_image_is_relative() {
        let form = ProductFormData {
            product_image: Some("/images/a.png".to_string()),
            ..valid_form()
        };

        assert!(matches!(form.validate(), Err(ProductError::InvalidImageUrl)));
    }

    #[test]
    fn should_flatten_form_values_into_update_payload() {
        let id = ProductId::parse(" p-3 ").unwrap();
        let payload = UpdateProductPayload::new(&id, valid_form());

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["product_id"], "p-3");
        assert_eq!(value["product_title"], "Desk lamp");
        assert!(value.get("product_description").is_none());
    }
}
