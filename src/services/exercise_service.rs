use anyhow::Result;
use sqlx::PgPool;

use crate::models::{Exercise, ExercisePage};

const DEFAULT_PAGE_SIZE: i64 = 12;
const MAX_PAGE_SIZE: i64 = 50;

const EXERCISE_COLUMNS: &str =
    "id, catalog_id, name, equipment, bodypart, target, secondary, gifurl, img, exercise_type";

/// Filters accepted by the catalog search endpoint
#[derive(Debug, Default)]
pub struct CatalogFilter {
    pub muscle: Option<String>,
    pub equipment: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct ExerciseService {
    db: PgPool,
}

impl ExerciseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Paginated catalog listing with optional case-insensitive name search
    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        name: Option<&str>,
    ) -> Result<ExercisePage> {
        let filter = CatalogFilter {
            name: name.map(|n| n.to_string()),
            ..CatalogFilter::default()
        };
        self.search(&filter, page, limit).await
    }

    /// Filtered catalog search. `muscle` matches the primary target muscle
    /// exactly (ignoring case), `equipment` the same, `name` is a substring
    /// match.
    pub async fn search(
        &self,
        filter: &CatalogFilter,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ExercisePage> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE).max(1);
        let page = page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        let name_pattern = filter.name.as_deref().map(|n| format!("%{}%", n));

        let mut where_sql = String::new();
        let mut param_count = 1;
        if filter.muscle.is_some() {
            where_sql.push_str(&format!(" WHERE target ILIKE ${}", param_count));
            param_count += 1;
        }
        if filter.equipment.is_some() {
            where_sql.push_str(if where_sql.is_empty() { " WHERE" } else { " AND" });
            where_sql.push_str(&format!(" equipment ILIKE ${}", param_count));
            param_count += 1;
        }
        if name_pattern.is_some() {
            where_sql.push_str(if where_sql.is_empty() { " WHERE" } else { " AND" });
            where_sql.push_str(&format!(" name ILIKE ${}", param_count));
        }

        let count_sql = format!("SELECT COUNT(*) FROM exercises{}", where_sql);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(muscle) = &filter.muscle {
            count_query = count_query.bind(muscle);
        }
        if let Some(equipment) = &filter.equipment {
            count_query = count_query.bind(equipment);
        }
        if let Some(pattern) = &name_pattern {
            count_query = count_query.bind(pattern);
        }
        let total_items = count_query.fetch_one(&self.db).await?;

        let data_sql = format!(
            "SELECT {} FROM exercises{} ORDER BY name ASC LIMIT {} OFFSET {}",
            EXERCISE_COLUMNS, where_sql, limit, offset
        );
        let mut data_query = sqlx::query_as::<_, Exercise>(&data_sql);
        if let Some(muscle) = &filter.muscle {
            data_query = data_query.bind(muscle);
        }
        if let Some(equipment) = &filter.equipment {
            data_query = data_query.bind(equipment);
        }
        if let Some(pattern) = &name_pattern {
            data_query = data_query.bind(pattern);
        }
        let data = data_query.fetch_all(&self.db).await?;

        Ok(ExercisePage {
            data,
            page,
            total_pages: total_pages(total_items, limit),
            total_items,
        })
    }
}

fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items == 0 {
        0
    } else {
        (total_items + limit - 1) / limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
    }
}
