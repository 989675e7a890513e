//! Case catalog logic - listing and the admin bulk upsert.

use crate::{
    entities::{Case, CaseItems, case},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Client-supplied contents of one case. Any `caseId` or `updatedAt` in the payload
/// is ignored; the map key and the save time win.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CaseData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub items: CaseItems,
}

/// Lists every case in the catalog.
pub async fn list_cases(db: &DatabaseConnection) -> Result<Vec<case::Model>> {
    Case::find().all(db).await.map_err(Into::into)
}

/// Creates or fully replaces one case.
#[instrument(skip(db, data))]
pub async fn upsert_case(db: &DatabaseConnection, case_id: String, data: CaseData) -> Result<()> {
    let model = case::ActiveModel {
        case_id: Set(case_id),
        name: Set(data.name),
        price: Set(data.price),
        image: Set(data.image),
        color: Set(data.color),
        items: Set(data.items),
        updated_at: Set(Utc::now()),
    };

    Case::insert(model)
        .on_conflict(
            OnConflict::column(case::Column::CaseId)
                .update_columns([
                    case::Column::Name,
                    case::Column::Price,
                    case::Column::Image,
                    case::Column::Color,
                    case::Column::Items,
                    case::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    debug!("Case upserted");
    Ok(())
}

/// Upserts every case in the order given, one statement per case.
///
/// There is no surrounding transaction: if one upsert fails, the ones before it
/// stay written, the ones after it are skipped, and the error is returned.
/// Returns the number of cases written.
#[instrument(skip(db, cases), fields(count = cases.len()))]
pub async fn save_cases(db: &DatabaseConnection, cases: Vec<(String, CaseData)>) -> Result<usize> {
    let mut saved = 0;
    for (case_id, data) in cases {
        upsert_case(db, case_id, data).await?;
        saved += 1;
    }
    info!(saved, "Case catalog saved");
    Ok(saved)
}
