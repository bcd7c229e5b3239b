//! HR vertical slice: employee and role use cases on top of the platform
//! repositories.

pub mod dto;
pub mod error;
pub mod fixtures;

use std::sync::Arc;

use entity::{Employee, Role};
use platform_db::{InMemoryRepository, Repository};
use tracing::{info, instrument};
use uuid::Uuid;

pub use dto::{
    EmployeeForm, EmployeeResponse, EmployeeShortResponse, RoleItemResponse, RoleResponse,
};
pub use error::{HrError, HrResult};

#[derive(Clone)]
pub struct HrModule {
    employees: Arc<dyn Repository<Employee>>,
    roles: Arc<dyn Repository<Role>>,
}

impl HrModule {
    pub fn new(
        employees: Arc<dyn Repository<Employee>>,
        roles: Arc<dyn Repository<Role>>,
    ) -> Self {
        Self { employees, roles }
    }

    /// Empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Employee>::new()),
            Arc::new(InMemoryRepository::<Role>::new()),
        )
    }

    /// In-memory stores preloaded with [`fixtures`].
    pub fn with_fixtures() -> Self {
        let fixtures = fixtures::all();
        info!(
            roles = fixtures.roles.len(),
            employees = fixtures.employees.len(),
            "loading demo fixtures"
        );
        Self::new(
            Arc::new(InMemoryRepository::with_data(fixtures.employees)),
            Arc::new(InMemoryRepository::with_data(fixtures.roles)),
        )
    }

    #[instrument(name = "hr.list_roles", skip_all)]
    pub async fn list_roles(&self) -> Vec<RoleResponse> {
        self.roles
            .get_all()
            .await
            .into_iter()
            .map(RoleResponse::from)
            .collect()
    }

    #[instrument(name = "hr.list_employees", skip_all)]
    pub async fn list_employees(&self) -> Vec<EmployeeShortResponse> {
        self.employees
            .get_all()
            .await
            .iter()
            .map(EmployeeShortResponse::from)
            .collect()
    }

    #[instrument(name = "hr.get_employee", skip(self))]
    pub async fn employee(&self, id: Uuid) -> HrResult<EmployeeResponse> {
        let employee = self.find(id).await?;
        Ok(EmployeeResponse::from(&employee))
    }

    #[instrument(name = "hr.create_employee", skip_all, fields(role_id = %form.role_id))]
    pub async fn create_employee(&self, form: EmployeeForm) -> HrResult<EmployeeResponse> {
        let roles = self.matching_roles(form.role_id).await;
        let employee = Employee {
            id: Uuid::nil(),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            roles,
            applied_promocodes_count: form.applied_promocodes_count,
        };
        let created = self.employees.create(employee).await;
        info!(id = %created.id, "employee created");
        Ok(EmployeeResponse::from(&created))
    }

    #[instrument(name = "hr.update_employee", skip(self, form))]
    pub async fn update_employee(&self, id: Uuid, form: EmployeeForm) -> HrResult<EmployeeResponse> {
        let mut employee = self.find(id).await?;
        employee.first_name = form.first_name;
        employee.last_name = form.last_name;
        employee.email = form.email;
        employee.roles = self.matching_roles(form.role_id).await;
        employee.applied_promocodes_count = form.applied_promocodes_count;

        let updated = self
            .employees
            .update(employee)
            .await
            .ok_or(HrError::NotPersisted)?;
        info!(%id, "employee updated");
        Ok(EmployeeResponse::from(&updated))
    }

    #[instrument(name = "hr.delete_employee", skip(self))]
    pub async fn delete_employee(&self, id: Uuid) -> HrResult<()> {
        let employee = self.find(id).await?;
        if self.employees.delete(&employee).await {
            info!(%id, "employee deleted");
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> HrResult<Employee> {
        self.employees
            .get_by_id(id)
            .await
            .ok_or(HrError::NotFound(id))
    }

    // An unknown role id yields an empty role list rather than an error.
    async fn matching_roles(&self, role_id: Uuid) -> Vec<Role> {
        self.roles
            .get_all()
            .await
            .into_iter()
            .filter(|role| role.id == role_id)
            .collect()
    }
}
