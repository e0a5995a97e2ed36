use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{AppError, CreateDepartmentRequest, CreateEmployeeRequest, Department, Employee};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form, Input, Skeleton,
};

/// HR panel: departments (list + create) and employees (table + create + delete).
///
/// One load cycle fetches departments then employees sequentially, and every
/// mutation clears its form and restarts the cycle regardless of outcome.
#[component]
pub fn HrPanel() -> Element {
    let session = use_session();

    // Department create form
    let mut dep_name = use_signal(String::new);
    let mut dep_description = use_signal(String::new);
    let mut dep_manager_id = use_signal(String::new);
    let mut dep_saving = use_signal(|| false);

    // Employee create form
    let mut emp_email = use_signal(String::new);
    let mut emp_full_name = use_signal(String::new);
    let mut emp_password = use_signal(|| "password".to_string());
    let mut emp_joining_date = use_signal(String::new);
    let mut emp_department_id = use_signal(String::new);
    let mut emp_designation = use_signal(String::new);
    let mut emp_manager_user_id = use_signal(String::new);
    let mut emp_saving = use_signal(|| false);

    // user_id of the row whose delete is in flight
    let mut deleting = use_signal(|| Option::<String>::None);

    let mut data = use_resource(move || {
        let client = session.client();
        async move {
            let departments = client.list_departments().await;
            let employees = client.list_employees().await;
            (departments, employees)
        }
    });

    let handle_create_department = move |_: FormEvent| {
        if dep_saving() {
            return;
        }
        dep_saving.set(true);

        let client = session.client();
        let req = CreateDepartmentRequest {
            name: dep_name(),
            description: dep_description(),
            manager_id: dep_manager_id(),
        };
        spawn(async move {
            if let Err(e) = client.create_department(&req).await {
                tracing::warn!(error = %e, "create department failed");
            }
            dep_name.set(String::new());
            dep_description.set(String::new());
            dep_manager_id.set(String::new());
            dep_saving.set(false);
            data.restart();
        });
    };

    let handle_create_employee = move |_: FormEvent| {
        if emp_saving() {
            return;
        }
        emp_saving.set(true);

        let client = session.client();
        let req = CreateEmployeeRequest {
            email: emp_email(),
            full_name: emp_full_name(),
            password: emp_password(),
            joining_date: emp_joining_date(),
            department_id: emp_department_id(),
            designation: emp_designation(),
            manager_user_id: emp_manager_user_id(),
        };
        spawn(async move {
            if let Err(e) = client.create_employee(&req).await {
                tracing::warn!(error = %e, "create employee failed");
            }
            emp_email.set(String::new());
            emp_full_name.set(String::new());
            emp_password.set("password".to_string());
            emp_joining_date.set(String::new());
            emp_department_id.set(String::new());
            emp_designation.set(String::new());
            emp_manager_user_id.set(String::new());
            emp_saving.set(false);
            data.restart();
        });
    };

    let handle_delete = move |user_id: String| {
        if deleting().is_some() {
            return;
        }
        deleting.set(Some(user_id.clone()));

        let client = session.client();
        spawn(async move {
            if let Err(e) = client.delete_employee(&user_id).await {
                tracing::warn!(error = %e, user_id = %user_id, "delete employee failed");
            }
            deleting.set(None);
            data.restart();
        });
    };

    rsx! {
        div { class: "panel",
            Card {
                CardHeader {
                    CardTitle { "Departments" }
                }
                CardContent {
                    Form { onsubmit: handle_create_department,
                        div { class: "form-row",
                            Input {
                                placeholder: "Name",
                                value: dep_name(),
                                on_input: move |e: FormEvent| dep_name.set(e.value()),
                            }
                            Input {
                                placeholder: "Description",
                                value: dep_description(),
                                on_input: move |e: FormEvent| dep_description.set(e.value()),
                            }
                            Input {
                                placeholder: "Manager User ID",
                                value: dep_manager_id(),
                                on_input: move |e: FormEvent| dep_manager_id.set(e.value()),
                            }
                            Button { disabled: dep_saving(), "Add" }
                        }
                    }
                    match &*data.read() {
                        Some((Ok(departments), _)) => rsx! {
                            DepartmentList { departments: departments.clone() }
                        },
                        Some((Err(e), _)) => rsx! {
                            FetchError { what: "departments", error: e.clone() }
                        },
                        None => rsx! {
                            Skeleton {}
                        },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Add Employee" }
                }
                CardContent {
                    Form { onsubmit: handle_create_employee,
                        div { class: "form-grid",
                            Input {
                                placeholder: "Email",
                                value: emp_email(),
                                on_input: move |e: FormEvent| emp_email.set(e.value()),
                            }
                            Input {
                                placeholder: "Name",
                                value: emp_full_name(),
                                on_input: move |e: FormEvent| emp_full_name.set(e.value()),
                            }
                            Input {
                                placeholder: "Password",
                                value: emp_password(),
                                on_input: move |e: FormEvent| emp_password.set(e.value()),
                            }
                            Input {
                                placeholder: "Joining",
                                value: emp_joining_date(),
                                on_input: move |e: FormEvent| emp_joining_date.set(e.value()),
                            }
                            Input {
                                placeholder: "Department",
                                value: emp_department_id(),
                                on_input: move |e: FormEvent| emp_department_id.set(e.value()),
                            }
                            Input {
                                placeholder: "Designation",
                                value: emp_designation(),
                                on_input: move |e: FormEvent| emp_designation.set(e.value()),
                            }
                            Input {
                                placeholder: "Manager",
                                value: emp_manager_user_id(),
                                on_input: move |e: FormEvent| emp_manager_user_id.set(e.value()),
                            }
                        }
                        Button { disabled: emp_saving(), "Create" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Employees" }
                }
                CardContent {
                    match &*data.read() {
                        Some((_, Ok(employees))) => rsx! {
                            EmployeeTable {
                                employees: employees.clone(),
                                deleting: deleting(),
                                on_delete: handle_delete,
                            }
                        },
                        Some((_, Err(e))) => rsx! {
                            FetchError { what: "employees", error: e.clone() }
                        },
                        None => rsx! {
                            Skeleton {}
                        },
                    }
                }
            }
        }
    }
}

/// Inline error line for a failed list fetch; prior/empty data stays put.
#[component]
pub fn FetchError(what: &'static str, error: AppError) -> Element {
    rsx! {
        p { class: "fetch-error", "Could not load {what}: {error.message}" }
    }
}

/// Bulleted department list with the manager id, or "unset" when absent.
#[component]
pub fn DepartmentList(departments: Vec<Department>) -> Element {
    rsx! {
        ul { class: "department-list",
            for dep in departments {
                li { key: "{dep.id}",
                    "{dep.name} — manager: {manager_label(&dep)}"
                }
            }
        }
    }
}

/// Employee table with a per-row delete action.
#[component]
pub fn EmployeeTable(
    employees: Vec<Employee>,
    deleting: Option<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Department" }
                DataTableColumn { "Designation" }
                DataTableColumn { "Manager" }
                DataTableColumn { "" }
            }
            DataTableBody {
                for emp in employees {
                    DataTableRow { key: "{emp.user_id}",
                        DataTableCell { "{emp.full_name}" }
                        DataTableCell { "{emp.email}" }
                        DataTableCell { "{dash(&emp.department_id)}" }
                        DataTableCell { "{dash(&emp.designation)}" }
                        DataTableCell { "{dash(&emp.manager_user_id)}" }
                        DataTableCell {
                            Button {
                                variant: ButtonVariant::Destructive,
                                disabled: deleting.as_deref() == Some(emp.user_id.as_str()),
                                onclick: {
                                    let user_id = emp.user_id.clone();
                                    move |_| on_delete.call(user_id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn manager_label(dep: &Department) -> &str {
    dep.manager_id.as_deref().unwrap_or("unset")
}

fn dash(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or("-")
}
