use serde::Serialize;

use crate::repos::fortune::FortuneRow;

#[derive(Debug, Serialize)]
pub struct FortuneResponse {
    pub id: i64,
    pub text: String,
}

impl From<FortuneRow> for FortuneResponse {
    fn from(row: FortuneRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
        }
    }
}
