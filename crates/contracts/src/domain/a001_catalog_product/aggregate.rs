use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Nested records
// ============================================================================

/// Категория товара в каталоге
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub slug: String,
}

/// Автор карточки товара
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient")]
    pub role: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар из внешнего каталога (только чтение)
///
/// `category` и `created_by` всегда материализованы: отсутствующий или `null`
/// объект в источнике превращается в запись с пустыми полями.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient")]
    pub category: Category,

    /// Дата создания в исходном виде (ISO 8601 или просто дата)
    #[serde(rename = "createdAt", default, deserialize_with = "lenient")]
    pub created_at: String,

    #[serde(rename = "createdBy", default, deserialize_with = "lenient")]
    pub created_by: User,

    #[serde(default, deserialize_with = "lenient")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient")]
    pub slug: String,

    #[serde(default, deserialize_with = "lenient")]
    pub title: String,

    #[serde(rename = "updatedAt", default, deserialize_with = "lenient")]
    pub updated_at: String,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Product {
    /// Дата создания, если строку удалось разобрать
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Дата последнего изменения, если строку удалось разобрать
    pub fn updated_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    /// Описание, только если оно непустое
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Разбирает RFC 3339 или дату без времени (полночь UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `null` или значение неожиданного типа превращается в `T::default()`
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Число или числовая строка (`"12.50"`); всё остальное даёт 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or_default(),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

// ============================================================================
// Response envelope
// ============================================================================

/// Ответ каталога: `{ "data": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<Product>,
}

impl CatalogResponse {
    /// Разбирает тело ответа каталога
    pub fn parse(body: &str) -> Result<Vec<Product>, serde_json::Error> {
        let response: CatalogResponse = serde_json::from_str(body)?;
        Ok(response.data)
    }
}

/// Извлекает товары из произвольного JSON.
///
/// Каждая запись разбирается отдельно: поле неожиданного типа получает значение
/// по умолчанию, элемент, который не является объектом, пропускается.
/// Любая другая форма (нет `data`, не массив) даёт пустой список.
pub fn products_from_payload(payload: &serde_json::Value) -> Vec<Product> {
    match payload.get("data") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| Product::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_record_is_normalized() {
        let payload = json!({
            "data": [{
                "_id": "1",
                "title": "Widget",
                "category": { "name": "tools" },
                "price": 9.99,
                "createdAt": "2023-01-01",
                "createdBy": { "name": "Ann" }
            }]
        });

        let products = products_from_payload(&payload);
        assert_eq!(products.len(), 1);

        let p = &products[0];
        assert_eq!(p.id, "1");
        assert_eq!(p.title, "Widget");
        assert_eq!(p.category.name, "tools");
        assert_eq!(p.category.id, "");
        assert_eq!(p.created_by.name, "Ann");
        assert_eq!(p.created_by.role, "");
        assert_eq!(p.price, 9.99);
        assert_eq!(p.description, None);
        assert_eq!(p.description_text(), None);
    }

    #[test]
    fn test_missing_and_null_sub_records_default() {
        let payload = json!({
            "data": [
                { "_id": "a", "title": "No category" },
                { "_id": "b", "category": null, "createdBy": null, "title": null }
            ]
        });

        let products = products_from_payload(&payload);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category, Category::default());
        assert_eq!(products[0].created_by, User::default());
        assert_eq!(products[1].category, Category::default());
        assert_eq!(products[1].title, "");
    }

    #[test]
    fn test_unexpected_shapes_yield_no_data() {
        assert!(products_from_payload(&json!({ "data": [] })).is_empty());
        assert!(products_from_payload(&json!({ "items": [{ "_id": "1" }] })).is_empty());
        assert!(products_from_payload(&json!({ "data": "oops" })).is_empty());
        assert!(products_from_payload(&json!([{ "_id": "1" }])).is_empty());
        assert!(products_from_payload(&json!({ "data": [1, 2, 3] })).is_empty());
    }

    #[test]
    fn test_odd_field_types_keep_the_record() {
        let payload = json!({
            "data": [
                { "_id": "1", "price": 9.99 },
                { "_id": "2", "price": "12.50" },
                { "_id": "3", "price": "n/a", "title": 42, "category": "tools" },
                { "_id": "4", "description": 7, "createdBy": ["Ann"] }
            ]
        });

        let products = products_from_payload(&payload);
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].price, 9.99);
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].price, 12.5);
        assert_eq!(products[2].price, 0.0);
        assert_eq!(products[2].title, "");
        assert_eq!(products[2].category, Category::default());
        assert_eq!(products[3].description, None);
        assert_eq!(products[3].created_by, User::default());
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let payload = json!({ "data": [1, { "_id": "a" }, "x", null] });
        let products = products_from_payload(&payload);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
    }

    #[test]
    fn test_parse_body() {
        let body = r#"{"data":[{"_id":"x","price":10,"description":"Red"}]}"#;
        let products = CatalogResponse::parse(body).unwrap();
        assert_eq!(products[0].price, 10.0);
        assert_eq!(products[0].description_text(), Some("Red"));

        assert!(CatalogResponse::parse("not json").is_err());
    }

    #[test]
    fn test_empty_description_is_absent() {
        let p = Product {
            description: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(p.description_text(), None);
    }

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2023-01-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-01-01T00:00:00+00:00");

        let dt = parse_timestamp("2022-05-10T14:02:26.123Z").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2022-05-10 14:02:26");

        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
