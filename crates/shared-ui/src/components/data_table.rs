use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
