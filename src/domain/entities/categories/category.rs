//! Category Entity Implementation

use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::{Entity, validated_id, validated_text};
use crate::validation::rules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
}

/// 레시피 카테고리
///
/// `code` 는 `CATE_` 로 시작하며 URL 과 필터에서 사용됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: String,
    code: String,
    name: String,
    description: String,
}

impl Category {
    pub fn new(record: CategoryRecord) -> AppResult<Self> {
        let mut category = Self {
            id: validated_id(&record.id)?,
            code: String::new(),
            name: String::new(),
            description: String::new(),
        };
        category.set_code(&record.code)?;
        category.set_name(&record.name)?;
        category.set_description(&record.description)?;
        Ok(category)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_code(&mut self, code: &str) -> AppResult<()> {
        rules::category_code(code).into_result("Category code")?;
        self.code = code.to_string();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> AppResult<()> {
        self.name = validated_text("Category name", name, 3, Some(30))?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> AppResult<()> {
        self.description = validated_text("Category description", description, 10, Some(300))?;
        Ok(())
    }
}

impl Entity for Category {
    const COLLECTION: &'static str = "CATEGORIES";
    type Record = CategoryRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            id: self.id.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn from_record(record: CategoryRecord) -> AppResult<Self> {
        Category::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CategoryRecord {
        CategoryRecord {
            id: "c1".to_string(),
            code: "CATE_BREAKFAST".to_string(),
            name: "Breakfast".to_string(),
            description: "Morning dishes to start the day".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let category = Category::new(record()).unwrap();
        let snapshot = category.to_record();

        assert_eq!(Category::from_record(snapshot.clone()).unwrap().to_record(), snapshot);
    }

    #[test]
    fn test_json_layout_is_camel_case() {
        let value = serde_json::to_value(Category::new(record()).unwrap().to_record()).unwrap();
        assert_eq!(value["code"], "CATE_BREAKFAST");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_name_boundaries() {
        let mut category = Category::new(record()).unwrap();

        assert!(category.set_name("abc").is_ok());
        assert!(category.set_name(&"n".repeat(30)).is_ok());
        assert!(category.set_name("ab").is_err());
        assert!(category.set_name(&"n".repeat(31)).is_err());
        assert_eq!(category.name(), "n".repeat(30));
    }

    #[test]
    fn test_lowercase_code_rejected() {
        let mut rec = record();
        rec.code = "CATE_breakfast".to_string();

        let err = Category::new(rec).unwrap_err();
        assert_eq!(err.to_string(), "Category code: Invalid category code format");
    }
}
