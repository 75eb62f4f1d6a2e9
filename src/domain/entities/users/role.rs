//! Role Entity Implementation

use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::{Entity, validated_id, validated_text};
use crate::validation::rules;

/// 관리자 역할 ID (`ROLE_ADMIN`)
pub const ADMIN_ROLE_ID: &str = "r1";
/// 일반 사용자 역할 ID (`ROLE_USER`). 신규 가입자의 기본 역할입니다.
pub const USER_ROLE_ID: &str = "r2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
}

/// 사용자 역할 엔티티 (`ROLE_ADMIN`, `ROLE_USER` ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    id: String,
    code: String,
    name: String,
    description: String,
}

impl Role {
    pub fn new(record: RoleRecord) -> AppResult<Self> {
        let mut role = Self {
            id: validated_id(&record.id)?,
            code: String::new(),
            name: String::new(),
            description: String::new(),
        };
        role.set_code(&record.code)?;
        role.set_name(&record.name)?;
        role.set_description(&record.description)?;
        Ok(role)
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
        rules::role_code(code).into_result("Role code")?;
        self.code = code.to_string();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> AppResult<()> {
        self.name = validated_text("Role name", name, 3, Some(50))?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> AppResult<()> {
        self.description = validated_text("Role description", description, 10, Some(200))?;
        Ok(())
    }
}

impl Entity for Role {
    const COLLECTION: &'static str = "USER_ROLES";
    type Record = RoleRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> RoleRecord {
        RoleRecord {
            id: self.id.clone(),
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn from_record(record: RoleRecord) -> AppResult<Self> {
        Role::new(record)
    }
}
