// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::SnapshotStore;
use staffdesk::{
    AccountFields, CoreError, DepartmentFields, EmployeeFields, EmployeeRow, EntityKind,
    RequestRow, ServiceRequestFields, Snapshot, employee_rows, request_rows,
    validate_email_available,
};
use staffdesk_domain::{
    Account, Department, EmailAddress, Employee, ServiceRequest,
};
use tracing::debug;

/// The entity repository: in-memory collections coupled to synchronous
/// snapshot persistence.
///
/// Every create/update/delete mutates the in-memory snapshot and then
/// immediately saves the whole snapshot through the store — there is no
/// batching and no deferred write. Reads are served from memory.
///
/// Deleting an account that is currently logged in is the caller's
/// responsibility to reject; the repository itself applies no session
/// rules.
#[derive(Debug)]
pub struct Repository {
    snapshot: Snapshot,
    store: SnapshotStore,
}

impl Repository {
    /// Opens a repository by loading (or seeding) the stored snapshot.
    #[must_use]
    pub fn open(mut store: SnapshotStore) -> Self {
        let snapshot: Snapshot = store.load();
        Self { snapshot, store }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the underlying store, for marker access.
    #[must_use]
    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Returns the underlying store mutably, for marker access.
    pub const fn store_mut(&mut self) -> &mut SnapshotStore {
        &mut self.store
    }

    /// Persists the current snapshot unconditionally.
    ///
    /// Mutations already save synchronously; this exists for orderly
    /// shutdown.
    pub fn flush(&mut self) {
        self.store.save(&self.snapshot);
    }

    fn persist(&mut self) {
        self.store.save(&self.snapshot);
    }

    // ---- accounts ------------------------------------------------------

    /// Lists all accounts in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.snapshot.accounts
    }

    /// Finds an account by id.
    #[must_use]
    pub fn account_by_id(&self, id: i64) -> Option<&Account> {
        self.snapshot.account_by_id(id)
    }

    /// Finds an account by email (case-insensitive).
    #[must_use]
    pub fn account_by_email(&self, email: &EmailAddress) -> Option<&Account> {
        self.snapshot.account_by_email(email)
    }

    /// Creates an account, enforcing email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateEmail` if the address is taken.
    pub fn create_account(&mut self, fields: AccountFields) -> Result<Account, CoreError> {
        validate_email_available(&self.snapshot, &fields.email, None)?;
        let account: Account = Account::new(
            self.snapshot.next_account_id(),
            fields.first_name,
            fields.last_name,
            fields.email,
            fields.password,
            fields.role,
            fields.verified,
        );
        debug!(id = account.id, email = %account.email, "creating account");
        self.snapshot.accounts.push(account.clone());
        self.persist();
        Ok(account)
    }

    /// Updates every field of an existing account.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no account has the id, or
    /// `CoreError::DuplicateEmail` if the new address belongs to another
    /// account.
    pub fn update_account(&mut self, id: i64, fields: AccountFields) -> Result<(), CoreError> {
        if self.snapshot.account_by_id(id).is_none() {
            return Err(CoreError::NotFound {
                kind: EntityKind::Account,
                id,
            });
        }
        validate_email_available(&self.snapshot, &fields.email, Some(id))?;
        if let Some(account) = self
            .snapshot
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
        {
            account.first_name = fields.first_name;
            account.last_name = fields.last_name;
            account.email = fields.email;
            account.password = fields.password;
            account.role = fields.role;
            account.verified = fields.verified;
        }
        self.persist();
        Ok(())
    }

    /// Replaces an account's password.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no account has the id.
    pub fn set_password(&mut self, id: i64, password: String) -> Result<(), CoreError> {
        let account: &mut Account = self
            .snapshot
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(CoreError::NotFound {
                kind: EntityKind::Account,
                id,
            })?;
        account.password = password;
        self.persist();
        Ok(())
    }

    /// Marks the account with the given email as verified.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AccountNotFound` if no account holds the
    /// address.
    pub fn mark_verified(&mut self, email: &EmailAddress) -> Result<Account, CoreError> {
        let account: &mut Account = self
            .snapshot
            .accounts
            .iter_mut()
            .find(|account| account.email == *email)
            .ok_or_else(|| CoreError::AccountNotFound {
                email: email.value().to_string(),
            })?;
        account.verified = true;
        let verified: Account = account.clone();
        self.persist();
        Ok(verified)
    }

    /// Deletes an account by id.
    ///
    /// The caller must pre-check that the id is not the currently
    /// authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no account has the id.
    pub fn delete_account(&mut self, id: i64) -> Result<(), CoreError> {
        Self::remove_by_id(&mut self.snapshot.accounts, |acc| acc.id, id, EntityKind::Account)?;
        self.persist();
        Ok(())
    }

    // ---- departments ---------------------------------------------------

    /// Lists all departments in insertion order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.snapshot.departments
    }

    /// Finds a department by id.
    #[must_use]
    pub fn department_by_id(&self, id: i64) -> Option<&Department> {
        self.snapshot.department_by_id(id)
    }

    /// Creates a department.
    pub fn create_department(&mut self, fields: DepartmentFields) -> Department {
        let department: Department = Department::new(
            self.snapshot.next_department_id(),
            fields.name,
            fields.description,
        );
        debug!(id = department.id, name = %department.name, "creating department");
        self.snapshot.departments.push(department.clone());
        self.persist();
        department
    }

    /// Updates every field of an existing department.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no department has the id.
    pub fn update_department(
        &mut self,
        id: i64,
        fields: DepartmentFields,
    ) -> Result<(), CoreError> {
        let department: &mut Department = self
            .snapshot
            .departments
            .iter_mut()
            .find(|dept| dept.id == id)
            .ok_or(CoreError::NotFound {
                kind: EntityKind::Department,
                id,
            })?;
        department.name = fields.name;
        department.description = fields.description;
        self.persist();
        Ok(())
    }

    /// Deletes a department by id.
    ///
    /// Deletion does not cascade: employees referencing the department
    /// keep their `department_id` and resolve to "Unknown" on read.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no department has the id.
    pub fn delete_department(&mut self, id: i64) -> Result<(), CoreError> {
        Self::remove_by_id(
            &mut self.snapshot.departments,
            |dept| dept.id,
            id,
            EntityKind::Department,
        )?;
        self.persist();
        Ok(())
    }

    // ---- employees -----------------------------------------------------

    /// Lists all employee records in insertion order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.snapshot.employees
    }

    /// Finds an employee by id.
    #[must_use]
    pub fn employee_by_id(&self, id: i64) -> Option<&Employee> {
        self.snapshot.employee_by_id(id)
    }

    /// Creates an employee record.
    ///
    /// The referenced account and department ids are not checked for
    /// existence.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the hire date is invalid.
    pub fn create_employee(&mut self, fields: EmployeeFields) -> Result<Employee, CoreError> {
        let employee: Employee = Employee::new(
            self.snapshot.next_employee_id(),
            fields.employee_id,
            fields.user_id,
            fields.department_id,
            fields.position,
            fields.hire_date,
        )?;
        debug!(id = employee.id, "creating employee record");
        self.snapshot.employees.push(employee.clone());
        self.persist();
        Ok(employee)
    }

    /// Updates every field of an existing employee record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no employee has the id, or
    /// `CoreError::DomainViolation` if the hire date is invalid.
    pub fn update_employee(&mut self, id: i64, fields: EmployeeFields) -> Result<(), CoreError> {
        let replacement: Employee = Employee::new(
            id,
            fields.employee_id,
            fields.user_id,
            fields.department_id,
            fields.position,
            fields.hire_date,
        )?;
        let slot: &mut Employee = self
            .snapshot
            .employees
            .iter_mut()
            .find(|emp| emp.id == id)
            .ok_or(CoreError::NotFound {
                kind: EntityKind::Employee,
                id,
            })?;
        *slot = replacement;
        self.persist();
        Ok(())
    }

    /// Deletes an employee record by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no employee has the id.
    pub fn delete_employee(&mut self, id: i64) -> Result<(), CoreError> {
        Self::remove_by_id(
            &mut self.snapshot.employees,
            |emp| emp.id,
            id,
            EntityKind::Employee,
        )?;
        self.persist();
        Ok(())
    }

    /// Resolves all employees with account emails and department names,
    /// substituting "Unknown" for dangling references.
    #[must_use]
    pub fn employee_rows(&self) -> Vec<EmployeeRow> {
        employee_rows(&self.snapshot)
    }

    // ---- service requests ----------------------------------------------

    /// Lists all service requests in insertion order.
    #[must_use]
    pub fn requests(&self) -> &[ServiceRequest] {
        &self.snapshot.requests
    }

    /// Finds a service request by id.
    #[must_use]
    pub fn request_by_id(&self, id: i64) -> Option<&ServiceRequest> {
        self.snapshot.request_by_id(id)
    }

    /// Creates a service request.
    pub fn create_request(&mut self, fields: ServiceRequestFields) -> ServiceRequest {
        let request: ServiceRequest = ServiceRequest::new(
            self.snapshot.next_request_id(),
            fields.user_id,
            fields.subject,
            fields.details,
            fields.status,
        );
        debug!(id = request.id, "creating service request");
        self.snapshot.requests.push(request.clone());
        self.persist();
        request
    }

    /// Updates every field of an existing service request.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no request has the id.
    pub fn update_request(
        &mut self,
        id: i64,
        fields: ServiceRequestFields,
    ) -> Result<(), CoreError> {
        let request: &mut ServiceRequest = self
            .snapshot
            .requests
            .iter_mut()
            .find(|req| req.id == id)
            .ok_or(CoreError::NotFound {
                kind: EntityKind::Request,
                id,
            })?;
        request.user_id = fields.user_id;
        request.subject = fields.subject;
        request.details = fields.details;
        request.status = fields.status;
        self.persist();
        Ok(())
    }

    /// Deletes a service request by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no request has the id.
    pub fn delete_request(&mut self, id: i64) -> Result<(), CoreError> {
        Self::remove_by_id(
            &mut self.snapshot.requests,
            |req| req.id,
            id,
            EntityKind::Request,
        )?;
        self.persist();
        Ok(())
    }

    /// Resolves all service requests with submitter emails, substituting
    /// "Unknown" for dangling references.
    #[must_use]
    pub fn request_rows(&self) -> Vec<RequestRow> {
        request_rows(&self.snapshot)
    }

    // ---- shared --------------------------------------------------------

    fn remove_by_id<T>(
        records: &mut Vec<T>,
        id_of: impl Fn(&T) -> i64,
        id: i64,
        kind: EntityKind,
    ) -> Result<(), CoreError> {
        let index: usize = records
            .iter()
            .position(|record| id_of(record) == id)
            .ok_or(CoreError::NotFound { kind, id })?;
        records.remove(index);
        Ok(())
    }
}
