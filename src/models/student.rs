use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::traits::{Entity, EntityPayload, PgQuery};
use crate::validation::FieldRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentData {
    pub name: String,
    pub address: String,
}

impl Entity for Student {
    type Payload = StudentData;

    const NAME: &'static str = "Student";
    const LABEL: &'static str = "student";
    const TABLE_NAME: &'static str = "students";
    const COLUMNS: &'static [&'static str] = &["name", "address"];
}

impl EntityPayload for StudentData {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new("name", "Name", 50),
        FieldRule::new("address", "Address", 100),
    ];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.as_str()).bind(self.address.as_str())
    }
}
