//! Request and response shapes for the HR endpoints. Field names are camelCase on
//! the wire.

use entity::{Employee, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat field set accepted when creating or updating an employee.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: Uuid,
    pub applied_promocodes_count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<RoleItemResponse>,
    pub applied_promocodes_count: i32,
}

/// Role as embedded in an employee view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleItemResponse {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<&Employee> for EmployeeShortResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email.clone(),
            full_name: employee.full_name(),
        }
    }
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email.clone(),
            full_name: employee.full_name(),
            roles: employee.roles.iter().map(RoleItemResponse::from).collect(),
            applied_promocodes_count: employee.applied_promocodes_count,
        }
    }
}

impl From<&Role> for RoleItemResponse {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
        }
    }
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_view_uses_camel_case() {
        let employee = Employee {
            id: Uuid::nil(),
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            email: "ivan@example.com".into(),
            roles: vec![Role::new("Admin", "Administrator")],
            applied_promocodes_count: 5,
        };
        let value = serde_json::to_value(EmployeeResponse::from(&employee)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": Uuid::nil(),
                "email": "ivan@example.com",
                "fullName": "Ivan Ivanov",
                "roles": [{"name": "Admin", "description": "Administrator"}],
                "appliedPromocodesCount": 5,
            })
        );
    }

    #[test]
    fn form_reads_camel_case_fields() {
        let role_id = Uuid::new_v4();
        let form: EmployeeForm = serde_json::from_value(json!({
            "firstName": "Ivan",
            "lastName": "Ivanov",
            "email": "ivan@example.com",
            "roleId": role_id,
            "appliedPromocodesCount": 5,
        }))
        .unwrap();
        assert_eq!(form.role_id, role_id);
        assert_eq!(form.applied_promocodes_count, 5);
    }
}
