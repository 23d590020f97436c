//! Per-category business counts and the family grouping built on them.

use std::collections::HashMap;

use revdb_core::{category_family, matches_country, BusinessRecord, CATEGORY_CATALOG};
use serde::Serialize;

/// In-memory `GROUP BY category, COUNT(*)` over the country-filtered catalog.
#[must_use]
pub fn count_by_category(catalog: &[BusinessRecord], country_terms: &[String]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for business in catalog
        .iter()
        .filter(|b| matches_country(b.country.as_deref(), country_terms))
    {
        *counts.entry(business.category.clone()).or_default() += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub slug: String,
    pub name: String,
    pub family: String,
    pub company_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFamily {
    pub name: String,
    pub company_count: u32,
    pub category_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedFamily {
    #[serde(flatten)]
    pub family: CategoryFamily,
    pub subcategories: Vec<CategoryStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalytics {
    pub categories: Vec<CategoryStat>,
    pub families: Vec<CategoryFamily>,
    pub grouped_families: Vec<GroupedFamily>,
}

/// Every catalog category with its business count, plus family rollups.
///
/// All lists are ordered by count descending, then name ascending.
#[must_use]
pub fn category_analytics(counts: &HashMap<String, u32>) -> CategoryAnalytics {
    let mut categories: Vec<CategoryStat> = CATEGORY_CATALOG
        .iter()
        .map(|entry| {
            let family = category_family(entry.name);
            CategoryStat {
                slug: entry.slug.to_string(),
                name: entry.name.to_string(),
                family: if family.is_empty() { "Other" } else { family }.to_string(),
                company_count: counts.get(entry.name).copied().unwrap_or(0),
            }
        })
        .collect();
    categories.sort_by(|a, b| {
        b.company_count
            .cmp(&a.company_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut families: Vec<CategoryFamily> = Vec::new();
    for category in &categories {
        if let Some(family) = families.iter_mut().find(|f| f.name == category.family) {
            family.company_count += category.company_count;
            family.category_count += 1;
        } else {
            families.push(CategoryFamily {
                name: category.family.clone(),
                company_count: category.company_count,
                category_count: 1,
            });
        }
    }
    families.sort_by(|a, b| {
        b.company_count
            .cmp(&a.company_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    let grouped_families = families
        .iter()
        .map(|family| GroupedFamily {
            family: family.clone(),
            subcategories: categories
                .iter()
                .filter(|c| c.family == family.name)
                .cloned()
                .collect(),
        })
        .collect();

    CategoryAnalytics {
        categories,
        families,
        grouped_families,
    }
}
