//! HTML rendering for the tracker page.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, SUMMARY_CARD_STYLE, base, dollar_input_styles, format_currency,
        format_date,
    },
};

use super::{core::Totals, models::TransactionRow};

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

/// Render the full tracker page: summary, entry form, and transaction list.
pub(crate) fn tracker_view(totals: Totals, rows: &[TransactionRow], form_date: Date) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full max-w-md" id="tracker-content"
            {
                h1 class="text-xl font-bold text-center" { "Expense Tracker" }

                (summary_view(totals))

                (transaction_form(form_date))

                (transaction_list(rows))
            }
        }
    };

    base("Expense Tracker", &[dollar_input_styles()], &content)
}

fn summary_view(totals: Totals) -> Markup {
    html! {
        header class="grid grid-cols-3 gap-2" id="summary"
        {
            div class=(SUMMARY_CARD_STYLE)
            {
                h5 class="text-sm text-gray-600 dark:text-gray-400" { "Total Balance" }
                span id="balance" class=(format!("font-bold {}", amount_class(totals.balance)))
                {
                    (format_currency(totals.balance))
                }
            }

            div class=(SUMMARY_CARD_STYLE)
            {
                h5 class="text-sm text-gray-600 dark:text-gray-400" { "Income" }
                span id="income" class="font-bold text-green-700 dark:text-green-300"
                {
                    (format_currency(totals.income))
                }
            }

            div class=(SUMMARY_CARD_STYLE)
            {
                h5 class="text-sm text-gray-600 dark:text-gray-400" { "Expense" }
                span id="expense" class="font-bold text-red-700 dark:text-red-300"
                {
                    (format_currency(-totals.expense))
                }
            }
        }
    }
}

fn transaction_form(form_date: Date) -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;

    html! {
        form
            id="transaction-form"
            hx-post=(create_transaction_route)
            class="w-full space-y-4"
        {
            div class="flex items-center gap-2"
            {
                input
                    name="type"
                    id="type"
                    type="checkbox"
                    class="h-4 w-4 shrink-0 cursor-pointer text-blue-600";

                label
                    for="type"
                    class=(FORM_LABEL_STYLE)
                    style="margin-bottom: 0"
                {
                    "Income (leave unchecked for an expense)"
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                // w-full needed to ensure the input takes the full width of the form
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        min="0.01"
                        step="0.01"
                        placeholder="0.00"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Name"
                }

                input
                    name="name"
                    id="name"
                    type="text"
                    placeholder="Name"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    required
                    value=(form_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                "Add Transaction"
            }
        }
    }
}

fn transaction_list(rows: &[TransactionRow]) -> Markup {
    if rows.is_empty() {
        return html! {
            div id="transaction-list"
            {
                p class="text-center text-gray-600 dark:text-gray-400" { "No transactions." }
            }
        };
    }

    html! {
        ul id="transaction-list" class="divide-y divide-gray-200 dark:divide-gray-700"
        {
            @for row in rows
            {
                li class="flex items-center justify-between py-2 gap-2"
                {
                    div class="name"
                    {
                        h4 class="font-medium" { (row.name) }
                        p class="text-sm text-gray-600 dark:text-gray-400" { (format_date(row.date)) }
                    }

                    div class=(format!("amount {}", row.kind.as_str()))
                    {
                        span class=(amount_class(row.amount)) { (format_currency(row.amount)) }
                    }

                    div class="action"
                    {
                        button
                            hx-delete=(row.delete_url)
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use time::macros::date;

    use crate::transaction::{
        core::{Totals, Transaction, TransactionKind},
        models::TransactionRow,
    };

    use super::{tracker_view, transaction_list};

    fn test_rows() -> Vec<TransactionRow> {
        [
            Transaction {
                id: 1,
                name: "Salary".to_owned(),
                amount: 1000.0,
                date: date!(2024 - 01 - 01),
                kind: TransactionKind::Income,
            },
            Transaction {
                id: 2,
                name: "Coffee".to_owned(),
                amount: 4.5,
                date: date!(2024 - 01 - 02),
                kind: TransactionKind::Expense,
            },
        ]
        .iter()
        .map(TransactionRow::new_from_transaction)
        .collect()
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let html = transaction_list(&[]).into_string();

        assert!(html.contains("No transactions."));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn list_renders_one_row_per_transaction_in_insertion_order() {
        let html = transaction_list(&test_rows()).into_string();

        assert!(!html.contains("No transactions."));
        let salary_position = html.find("Salary").expect("row for Salary should render");
        let coffee_position = html.find("Coffee").expect("row for Coffee should render");
        assert!(
            salary_position < coffee_position,
            "rows should keep insertion order"
        );
    }

    #[test]
    fn rows_show_signed_amounts_and_kind_tags() {
        let html = transaction_list(&test_rows()).into_string();

        assert!(html.contains("+$1,000.00"));
        assert!(html.contains("-$4.50"));
        assert!(html.contains("amount income"));
        assert!(html.contains("amount expense"));
    }

    #[test]
    fn rows_have_delete_controls_bound_to_their_id() {
        let html = transaction_list(&test_rows()).into_string();

        assert!(html.contains("hx-delete=\"/api/transactions/1\""));
        assert!(html.contains("hx-delete=\"/api/transactions/2\""));
    }

    #[test]
    fn page_shows_summary_totals() {
        let totals = Totals {
            income: 1000.0,
            expense: 4.5,
            balance: 995.5,
        };

        let html = tracker_view(totals, &test_rows(), date!(2024 - 01 - 02)).into_string();

        assert!(html.contains("Total Balance"));
        assert!(html.contains("+$995.50"));
        assert!(html.contains("+$1,000.00"));
        // The expense card shows the outflow as a negative figure.
        assert!(html.contains("-$4.50"));
    }

    #[test]
    fn formatted_dates_appear_in_rows() {
        let html = transaction_list(&test_rows()).into_string();

        assert!(html.contains("Jan 1, 2024"));
        assert!(html.contains("Jan 2, 2024"));
    }
}
