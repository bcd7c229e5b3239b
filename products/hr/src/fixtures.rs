//! Demo records loaded into a fresh process.

use entity::{Employee, Role};
use serde::Serialize;
use uuid::{Uuid, uuid};

pub const ADMIN_ROLE_ID: Uuid = uuid!("53729686-a368-4eeb-8bfa-cc69b6050d02");
pub const PARTNER_MANAGER_ROLE_ID: Uuid = uuid!("b0ae7aac-5493-45cd-ad16-87426a5e7665");

#[derive(Clone, Debug, Serialize)]
pub struct Fixtures {
    pub roles: Vec<Role>,
    pub employees: Vec<Employee>,
}

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".into(),
            description: "Administrator".into(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".into(),
            description: "Partner manager".into(),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    let roles = roles();
    let pick = |id: Uuid| -> Vec<Role> { roles.iter().filter(|r| r.id == id).cloned().collect() };
    vec![
        Employee {
            id: uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f"),
            first_name: "Ivan".into(),
            last_name: "Sergeev".into(),
            email: "owner@somemail.ru".into(),
            roles: pick(ADMIN_ROLE_ID),
            applied_promocodes_count: 5,
        },
        Employee {
            id: uuid!("f766e2bf-340a-46ea-bff3-f1700b435895"),
            first_name: "Petr".into(),
            last_name: "Andreev".into(),
            email: "andreev@somemail.ru".into(),
            roles: pick(PARTNER_MANAGER_ROLE_ID),
            applied_promocodes_count: 10,
        },
    ]
}

pub fn all() -> Fixtures {
    Fixtures {
        roles: roles(),
        employees: employees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_employee_has_a_known_role() {
        let role_ids: Vec<Uuid> = roles().iter().map(|r| r.id).collect();
        for employee in employees() {
            assert_eq!(employee.roles.len(), 1);
            assert!(role_ids.contains(&employee.roles[0].id));
        }
    }
}
