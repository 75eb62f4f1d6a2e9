//! Recipe Entity Implementation

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Entity, validated_id, validated_text};
use crate::validation::rules;

/// 영양 정보 (1인분 기준). 모든 항목은 선택입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    /// kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// mg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 재료 묶음 (`"For the sauce"` 같은 섹션 단위)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSection {
    pub section: String,
    #[serde(default)]
    pub items: Vec<Ingredient>,
}

/// 레시피 저장 레코드
///
/// `totalTime` 은 쓰기 시점에 계산되어 함께 저장되지만 읽을 때는 무시합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub prep_time: i64,
    pub cook_time: i64,
    #[serde(default, skip_deserializing)]
    pub total_time: i64,
    pub category_id: String,
    pub author_id: String,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub ingredients: Vec<IngredientSection>,
    pub directions: String,
    #[serde(default)]
    pub stars: i64,
}

/// 레시피 엔티티
///
/// `category_id` 와 `author_id` 는 약한 참조입니다. 가리키는 레코드가 없을 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: String,
    code: String,
    name: String,
    description: String,
    image: String,
    prep_time: u32,
    cook_time: u32,
    category_id: String,
    author_id: String,
    nutrition: Nutrition,
    ingredients: Vec<IngredientSection>,
    directions: String,
    stars: u8,
}

fn minutes(label: &str, value: i64) -> AppResult<u32> {
    rules::positive_integer(value).into_result(label)?;
    u32::try_from(value).map_err(|_| AppError::invalid_field(label, "Value is too large"))
}

impl Recipe {
    pub fn new(record: RecipeRecord) -> AppResult<Self> {
        let mut recipe = Self {
            id: validated_id(&record.id)?,
            code: String::new(),
            name: String::new(),
            description: String::new(),
            image: String::new(),
            prep_time: 0,
            cook_time: 0,
            category_id: String::new(),
            author_id: String::new(),
            nutrition: Nutrition::default(),
            ingredients: Vec::new(),
            directions: String::new(),
            stars: 0,
        };
        recipe.set_code(&record.code)?;
        recipe.set_name(&record.name)?;
        recipe.set_description(&record.description)?;
        recipe.set_image(&record.image)?;
        recipe.set_prep_time(record.prep_time)?;
        recipe.set_cook_time(record.cook_time)?;
        recipe.set_category_id(&record.category_id)?;
        recipe.set_author_id(&record.author_id)?;
        recipe.set_nutrition(record.nutrition)?;
        recipe.set_ingredients(record.ingredients)?;
        recipe.set_directions(&record.directions)?;
        recipe.set_stars(record.stars)?;
        Ok(recipe)
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

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn cook_time(&self) -> u32 {
        self.cook_time
    }

    /// 준비 시간 + 조리 시간 (분)
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn nutrition(&self) -> &Nutrition {
        &self.nutrition
    }

    pub fn ingredients(&self) -> &[IngredientSection] {
        &self.ingredients
    }

    pub fn directions(&self) -> &str {
        &self.directions
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn set_code(&mut self, code: &str) -> AppResult<()> {
        rules::recipe_code(code).into_result("Recipe code")?;
        self.code = code.to_string();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> AppResult<()> {
        self.name = validated_text("Recipe name", name, 3, Some(100))?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> AppResult<()> {
        self.description = validated_text("Recipe description", description, 10, Some(500))?;
        Ok(())
    }

    pub fn set_image(&mut self, image: &str) -> AppResult<()> {
        rules::image_url(image).into_result("Recipe image")?;
        self.image = image.to_string();
        Ok(())
    }

    pub fn set_prep_time(&mut self, prep_time: i64) -> AppResult<()> {
        self.prep_time = minutes("Prep time", prep_time)?;
        Ok(())
    }

    pub fn set_cook_time(&mut self, cook_time: i64) -> AppResult<()> {
        self.cook_time = minutes("Cook time", cook_time)?;
        Ok(())
    }

    pub fn set_category_id(&mut self, category_id: &str) -> AppResult<()> {
        rules::id(category_id).into_result("Category ID")?;
        self.category_id = category_id.trim().to_string();
        Ok(())
    }

    pub fn set_author_id(&mut self, author_id: &str) -> AppResult<()> {
        rules::id(author_id).into_result("Author ID")?;
        self.author_id = author_id.trim().to_string();
        Ok(())
    }

    pub fn set_nutrition(&mut self, nutrition: Nutrition) -> AppResult<()> {
        rules::nutrition(
            nutrition.calories,
            nutrition.protein,
            nutrition.fat,
            nutrition.carbs,
            nutrition.cholesterol,
        )
        .into_result("Nutrition")?;
        self.nutrition = nutrition;
        Ok(())
    }

    /// 섹션 이름과 재료 이름은 비어있을 수 없습니다.
    pub fn set_ingredients(&mut self, ingredients: Vec<IngredientSection>) -> AppResult<()> {
        for section in &ingredients {
            if section.section.trim().is_empty() {
                return Err(AppError::invalid_field("Ingredients", "Section name is required"));
            }
            if section.items.iter().any(|item| item.name.trim().is_empty()) {
                return Err(AppError::invalid_field(
                    "Ingredients",
                    format!("Ingredient name is required in section '{}'", section.section),
                ));
            }
        }
        self.ingredients = ingredients;
        Ok(())
    }

    pub fn set_directions(&mut self, directions: &str) -> AppResult<()> {
        self.directions = validated_text("Directions", directions, 10, None)?;
        Ok(())
    }

    pub fn set_stars(&mut self, stars: i64) -> AppResult<()> {
        rules::rating_stars(stars).into_result("Stars")?;
        // 0..=5 검증 후이므로 변환 실패 없음
        self.stars = u8::try_from(stars).unwrap_or_default();
        Ok(())
    }
}

impl Entity for Recipe {
    const COLLECTION: &'static str = "RECIPES";
    type Record = RecipeRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> RecipeRecord {
        RecipeRecord {
            id: self.id.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            prep_time: i64::from(self.prep_time),
            cook_time: i64::from(self.cook_time),
            total_time: i64::from(self.total_time()),
            category_id: self.category_id.clone(),
            author_id: self.author_id.clone(),
            nutrition: self.nutrition.clone(),
            ingredients: self.ingredients.clone(),
            directions: self.directions.clone(),
            stars: i64::from(self.stars),
        }
    }

    fn from_record(record: RecipeRecord) -> AppResult<Self> {
        Recipe::new(record)
    }
}
