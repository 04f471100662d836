//! Reference records: clients, employees and departments

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::{Channel, ClientId, DepartmentId, EmployeeId};

/// Typed value of a client custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CustomFieldValue {
    Text(String),
    Number(#[cfg_attr(feature = "ts-gen", ts(type = "string"))] Decimal),
    Flag(bool),
    Date(NaiveDate),
}

/// Customer who raises tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, CustomFieldValue>,
}

/// Support agent or other staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub department_id: Option<DepartmentId>,
    pub is_active: bool,
}

/// Messenger or mailbox connected to a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDescriptor {
    pub channel: Channel,
    pub display_name: String,
    pub enabled: bool,
}

/// Group of employees handling a set of channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
    #[serde(default)]
    pub integrations: Vec<IntegrationDescriptor>,
}

impl Department {
    pub fn has_member(&self, employee: &EmployeeId) -> bool {
        self.employee_ids.contains(employee)
    }

    /// Channels with an enabled integration.
    pub fn enabled_channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.integrations.iter().filter(|i| i.enabled).map(|i| i.channel)
    }
}
