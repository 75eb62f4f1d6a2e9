//! 데모 데이터
//!
//! 모든 항목은 엔티티 검증 규칙을 통과해야 하며, 생성 실패는 시드 실패로 처리됩니다.

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::blogs::{BlogPost, BlogPostRecord};
use crate::domain::entities::categories::{Category, CategoryRecord};
use crate::domain::entities::recipes::{Ingredient, IngredientSection, Nutrition, Recipe, RecipeRecord};
use crate::domain::entities::users::{ADMIN_ROLE_ID, Role, RoleRecord, USER_ROLE_ID, User, UserRecord};

/// 데모 계정 공통 비밀번호
pub const DEMO_PASSWORD: &str = "abc123456";

pub fn roles() -> AppResult<Vec<Role>> {
    [
        (ADMIN_ROLE_ID, "ROLE_ADMIN", "Administrator", "Manages the catalog, members and published stories."),
        (USER_ROLE_ID, "ROLE_USER", "Member", "Browses recipes, keeps favorites and edits a profile."),
    ]
    .into_iter()
    .map(|(id, code, name, description)| {
        Role::new(RoleRecord {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
    })
    .collect()
}

/// 비밀번호는 `bcrypt_cost` 로 해시됩니다.
pub fn users(bcrypt_cost: u32) -> AppResult<Vec<User>> {
    let accounts = [
        ("u1", "hannah.moore@example.com", "Hannah Moore", ADMIN_ROLE_ID, "https://images.example.com/avatars/hannah.jpg", &["r1", "r4"][..]),
        ("u2", "leo.park@example.com", "Leo Park", USER_ROLE_ID, "https://images.example.com/avatars/leo.webp", &["r3"][..]),
        ("u3", "sofia.reyes@example.com", "Sofia Reyes", USER_ROLE_ID, "https://images.example.com/avatars/sofia.png", &[][..]),
    ];

    accounts
        .into_iter()
        .map(|(id, email, full_name, role_id, avatar, favorites)| {
            let password = bcrypt::hash(DEMO_PASSWORD, bcrypt_cost)
                .with_context(|| format!("Failed to hash demo password for {}", email))?;
            User::new(UserRecord {
                id: id.to_string(),
                email: email.to_string(),
                full_name: full_name.to_string(),
                password,
                avatar: avatar.to_string(),
                role_id: role_id.to_string(),
                favorite_recipes: favorites.iter().map(|r| r.to_string()).collect(),
            })
        })
        .collect()
}

pub fn categories() -> AppResult<Vec<Category>> {
    [
        ("c1", "CATE_VEGAN", "Plant Based", "Vegetable forward dishes without meat or dairy."),
        ("c2", "CATE_MEAT", "Hearty Mains", "Slow braises, roasts and grilled meat or fish."),
        ("c3", "CATE_DESSERT", "Desserts", "Cakes, custards, ice cream and other sweets."),
        ("c4", "CATE_DRINK", "Drinks", "Smoothies, fresh juices and warm cups for cold days."),
        ("c5", "CATE_BREAKFAST", "Breakfast", "Quick and filling ways to start the morning."),
    ]
    .into_iter()
    .map(|(id, code, name, description)| {
        Category::new(CategoryRecord {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
    })
    .collect()
}

struct RecipeSeed {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    description: &'static str,
    category_id: &'static str,
    author_id: &'static str,
    prep_time: i64,
    cook_time: i64,
    stars: i64,
    /// calories, protein, fat, carbs, cholesterol
    nutrition: [f64; 5],
    ingredients: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    directions: &'static str,
}

impl RecipeSeed {
    fn build(self) -> AppResult<Recipe> {
        let [calories, protein, fat, carbs, cholesterol] = self.nutrition;
        let ingredients = self
            .ingredients
            .iter()
            .map(|(section, items)| IngredientSection {
                section: section.to_string(),
                items: items
                    .iter()
                    .map(|(name, quantity)| Ingredient {
                        name: name.to_string(),
                        quantity: quantity.to_string(),
                        notes: None,
                    })
                    .collect(),
            })
            .collect();

        Recipe::new(RecipeRecord {
            id: self.id.to_string(),
            code: self.code.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            image: format!("https://images.example.com/recipes/{}.jpg", self.id),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.prep_time + self.cook_time,
            category_id: self.category_id.to_string(),
            author_id: self.author_id.to_string(),
            nutrition: Nutrition {
                calories: Some(calories),
                protein: Some(protein),
                fat: Some(fat),
                carbs: Some(carbs),
                cholesterol: Some(cholesterol),
            },
            ingredients,
            directions: self.directions.to_string(),
            stars: self.stars,
        })
    }
}

pub fn recipes() -> AppResult<Vec<Recipe>> {
    let seeds = vec![
        RecipeSeed {
            id: "r1",
            code: "REC_BEEF_NOODLE_SOUP",
            name: "Slow Simmered Beef Noodle Soup",
            description: "A clear, spiced broth simmered for hours and poured over rice noodles and thin slices of beef.",
            category_id: "c2",
            author_id: "u1",
            prep_time: 30,
            cook_time: 360,
            stars: 5,
            nutrition: [450.0, 25.0, 12.0, 58.0, 65.0],
            ingredients: &[
                ("Broth", &[("Beef bones", "1 kg"), ("Star anise and cinnamon", "1 pouch"), ("Charred onion", "1")]),
                ("To serve", &[("Rice noodles", "500 g"), ("Beef sirloin", "300 g"), ("Spring onion", "to taste")]),
            ],
            directions: "Simmer the bones for six hours with the charred onion and spices. Blanch the noodles, top with beef and ladle over the hot broth.",
        },
        RecipeSeed {
            id: "r2",
            code: "REC_AVOCADO_EGG_SALAD",
            name: "Avocado and Egg Salad",
            description: "A light starter rich in good fats that works well for a quick lunch.",
            category_id: "c1",
            author_id: "u2",
            prep_time: 15,
            cook_time: 10,
            stars: 4,
            nutrition: [320.0, 9.0, 28.0, 12.0, 185.0],
            ingredients: &[("Salad", &[("Avocado", "2"), ("Eggs", "2"), ("Lettuce", "200 g"), ("Mayonnaise", "2 tbsp")])],
            directions: "Boil the eggs until jammy. Dice the avocado, toss with the lettuce and dressing, then halve the eggs on top.",
        },
        RecipeSeed {
            id: "r3",
            code: "REC_CARAMEL_FLAN",
            name: "Caramel Flan",
            description: "Silky egg custard under a layer of slightly bitter caramel.",
            category_id: "c3",
            author_id: "u1",
            prep_time: 20,
            cook_time: 45,
            stars: 5,
            nutrition: [280.0, 8.0, 10.0, 38.0, 190.0],
            ingredients: &[
                ("Caramel", &[("Sugar", "100 g"), ("Water", "2 tbsp")]),
                ("Custard", &[("Eggs", "5"), ("Whole milk", "500 ml"), ("Vanilla", "1 tsp")]),
            ],
            directions: "Cook the sugar to a deep amber and pour into moulds. Whisk eggs with warm milk, strain, fill the moulds and steam gently.",
        },
        RecipeSeed {
            id: "r4",
            code: "REC_MANGO_SMOOTHIE",
            name: "Mango Lime Smoothie",
            description: "Ripe mango blended with yogurt and a squeeze of lime.",
            category_id: "c4",
            author_id: "u3",
            prep_time: 5,
            cook_time: 1,
            stars: 4,
            nutrition: [210.0, 6.0, 3.0, 42.0, 10.0],
            ingredients: &[("Blend", &[("Mango", "1 large"), ("Plain yogurt", "150 g"), ("Lime juice", "1 tbsp")])],
            directions: "Blend everything with a handful of ice until smooth and serve straight away.",
        },
        RecipeSeed {
            id: "r5",
            code: "REC_OVERNIGHT_OATS",
            name: "Overnight Oats with Berries",
            description: "Oats soaked overnight in milk, ready to eat with fresh berries in the morning.",
            category_id: "c5",
            author_id: "u2",
            prep_time: 10,
            cook_time: 1,
            stars: 3,
            nutrition: [350.0, 12.0, 9.0, 55.0, 15.0],
            ingredients: &[("Jar", &[("Rolled oats", "60 g"), ("Milk", "150 ml"), ("Mixed berries", "1 cup"), ("Honey", "1 tsp")])],
            directions: "Stir the oats, milk and honey in a jar, chill overnight and top with berries before serving.",
        },
        RecipeSeed {
            id: "r6",
            code: "REC_TOFU_STIR_FRY",
            name: "Crispy Tofu Stir Fry",
            description: "Golden tofu tossed with crunchy vegetables in a garlic soy glaze.",
            category_id: "c1",
            author_id: "u3",
            prep_time: 15,
            cook_time: 15,
            stars: 4,
            nutrition: [390.0, 21.0, 18.0, 34.0, 0.0],
            ingredients: &[
                ("Stir fry", &[("Firm tofu", "400 g"), ("Broccoli", "1 head"), ("Red pepper", "1")]),
                ("Glaze", &[("Soy sauce", "3 tbsp"), ("Garlic", "2 cloves"), ("Maple syrup", "1 tbsp")]),
            ],
            directions: "Fry the pressed tofu until crisp, add the vegetables, then pour in the glaze and toss until glossy.",
        },
        RecipeSeed {
            id: "r7",
            code: "REC_ROAST_CHICKEN",
            name: "Lemon Herb Roast Chicken",
            description: "A whole chicken roasted over potatoes with lemon, garlic and thyme.",
            category_id: "c2",
            author_id: "u2",
            prep_time: 20,
            cook_time: 80,
            stars: 5,
            nutrition: [520.0, 42.0, 28.0, 24.0, 140.0],
            ingredients: &[("Roast", &[("Whole chicken", "1.5 kg"), ("Potatoes", "800 g"), ("Lemon", "1"), ("Thyme", "4 sprigs")])],
            directions: "Season the chicken inside and out, set it on the sliced potatoes and roast until the juices run clear. Rest before carving.",
        },
        RecipeSeed {
            id: "r8",
            code: "REC_GINGER_TEA",
            name: "Honey Ginger Tea",
            description: "A warming cup of fresh ginger steeped with honey and lemon.",
            category_id: "c4",
            author_id: "u1",
            prep_time: 5,
            cook_time: 10,
            stars: 3,
            nutrition: [60.0, 0.0, 0.0, 16.0, 0.0],
            ingredients: &[("Tea", &[("Fresh ginger", "30 g"), ("Honey", "1 tbsp"), ("Lemon slice", "1")])],
            directions: "Simmer sliced ginger in water for ten minutes, strain into a cup and stir in honey and lemon.",
        },
    ];

    seeds.into_iter().map(RecipeSeed::build).collect()
}

pub fn blog_posts() -> AppResult<Vec<BlogPost>> {
    [
        (
            "b1",
            "Five Secrets to a Clearer Broth",
            "Skimming, charring and patience: small habits that turn a cloudy pot into a clean, deep flavoured soup base.",
            "u1",
            "2026-01-12T08:00:00.000Z",
            &["soup", "technique"][..],
        ),
        (
            "b2",
            "Eating More Plants Without Trying",
            "Simple swaps that put more vegetables on the table every day without giving up the dishes you already love.",
            "u3",
            "2026-02-03T09:30:00.000Z",
            &["vegan", "healthy"][..],
        ),
        (
            "b3",
            "Caramel Without the Fear",
            "Why sugar burns, how to read the colour and what to do when the pan seizes halfway through the process.",
            "u1",
            "2026-02-20T18:15:00.000Z",
            &["dessert", "technique"][..],
        ),
        (
            "b4",
            "A Week of Ten Minute Breakfasts",
            "Overnight oats, smoothies and toast toppings that take less time than your coffee and keep you full until lunch.",
            "u2",
            "2026-03-05T07:00:00.000Z",
            &["breakfast", "quick", "healthy"][..],
        ),
        (
            "b5",
            "Roasting a Chicken for Beginners",
            "Everything you need for a first roast: choosing the bird, seasoning ahead and knowing when it is really done.",
            "u2",
            "2026-03-28T16:45:00.000Z",
            &["meat", "technique"][..],
        ),
    ]
    .into_iter()
    .map(|(id, title, excerpt, author_id, published_at, tags)| {
        BlogPost::new(BlogPostRecord {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: blog_content(title, excerpt),
            image: format!("https://images.example.com/blog/{}.jpg", id),
            author_id: author_id.to_string(),
            published_at: published_at.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    })
    .collect()
}

fn blog_content(title: &str, excerpt: &str) -> String {
    format!(
        "# {}\n\n{}\n\n## Getting started\n\nRead the whole recipe before you begin, set out every ingredient \
         and give yourself a little more time than you think you need.\n\n## Keep practising\n\n\
         Cook it twice in the same week. The second attempt is where the details start to make sense.\n",
        title, excerpt
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::domain::entities::Entity;

    #[test]
    fn test_demo_data_is_valid() {
        assert_eq!(roles().unwrap().len(), 2);
        assert_eq!(categories().unwrap().len(), 5);
        assert_eq!(recipes().unwrap().len(), 8);
        assert_eq!(blog_posts().unwrap().len(), 5);
    }

    #[test]
    fn test_demo_users_have_hashed_passwords() {
        let users = users(4).unwrap();

        assert_eq!(users.len(), 3);
        for user in &users {
            assert!(bcrypt::verify(DEMO_PASSWORD, user.password_hash()).unwrap());
        }
    }

    #[test]
    fn test_references_resolve() {
        let category_ids: HashSet<String> = categories().unwrap().iter().map(|c| c.id().to_string()).collect();
        let user_ids: HashSet<String> = users(4).unwrap().iter().map(|u| u.id().to_string()).collect();
        let recipe_ids: HashSet<String> = recipes().unwrap().iter().map(|r| r.id().to_string()).collect();

        for recipe in recipes().unwrap() {
            assert!(category_ids.contains(recipe.category_id()));
            assert!(user_ids.contains(recipe.author_id()));
        }
        for post in blog_posts().unwrap() {
            assert!(user_ids.contains(post.author_id()));
        }
        for user in users(4).unwrap() {
            assert!(user.favorite_recipes().iter().all(|id| recipe_ids.contains(id)));
        }
    }
}
