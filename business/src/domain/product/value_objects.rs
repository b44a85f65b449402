use serde::{Deserialize, Serialize};

/// Fixed category set of the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Vehicles,
    Home,
    Books,
    Sports,
    Collectibles,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Electronics => write!(f, "electronics"),
            Category::Fashion => write!(f, "fashion"),
            Category::Vehicles => write!(f, "vehicles"),
            Category::Home => write!(f, "home"),
            Category::Books => write!(f, "books"),
            Category::Sports => write!(f, "sports"),
            Category::Collectibles => write!(f, "collectibles"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "fashion" => Ok(Category::Fashion),
            "vehicles" => Ok(Category::Vehicles),
            "home" => Ok(Category::Home),
            "books" => Ok(Category::Books),
            "sports" => Ok(Category::Sports),
            "collectibles" => Ok(Category::Collectibles),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// Active category filter; `All` is the sentinel that bypasses the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// True when `category` is visible under this selection.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelection::All => write!(f, "all"),
            CategorySelection::Only(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for CategorySelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategorySelection::All),
            other => other.parse::<Category>().map(CategorySelection::Only),
        }
    }
}

/// Condition of a second-hand item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    LikeNew,
    Excellent,
    Good,
    Fair,
    Vintage,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::LikeNew => write!(f, "like-new"),
            Condition::Excellent => write!(f, "excellent"),
            Condition::Good => write!(f, "good"),
            Condition::Fair => write!(f, "fair"),
            Condition::Vintage => write!(f, "vintage"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like-new" => Ok(Condition::LikeNew),
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "vintage" => Ok(Condition::Vintage),
            _ => Err(format!("Invalid condition: {}", s)),
        }
    }
}
