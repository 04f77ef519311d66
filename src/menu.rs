use std::io::Write;
use std::str::FromStr;

use tokio::io::AsyncBufRead;

use crate::{
    commands,
    console::Console,
    error::{AppError, AppResult},
    render,
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListCustomers,
    ListProducts,
    AddProduct,
    UpdateStock,
    AddCustomer,
    CustomerPurchases,
    SearchByCategory,
    SalesReport,
    Exit,
}

impl MenuChoice {
    /// What the action was doing, for `Error <activity>: <cause>` messages.
    pub fn activity(&self) -> &'static str {
        match self {
            MenuChoice::ListCustomers => "fetching customers",
            MenuChoice::ListProducts => "fetching products",
            MenuChoice::AddProduct => "adding product",
            MenuChoice::UpdateStock => "updating stock",
            MenuChoice::AddCustomer => "adding customer",
            MenuChoice::CustomerPurchases => "fetching customer purchases",
            MenuChoice::SearchByCategory => "searching products",
            MenuChoice::SalesReport => "generating sales report",
            MenuChoice::Exit => "exiting",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ListCustomers),
            "2" => Ok(MenuChoice::ListProducts),
            "3" => Ok(MenuChoice::AddProduct),
            "4" => Ok(MenuChoice::UpdateStock),
            "5" => Ok(MenuChoice::AddCustomer),
            "6" => Ok(MenuChoice::CustomerPurchases),
            "7" => Ok(MenuChoice::SearchByCategory),
            "8" => Ok(MenuChoice::SalesReport),
            "9" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Why the menu loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Requested,
    Interrupted,
}

/// Read-eval loop. Operation failures and unreadable input are reported and
/// the loop continues; only an exit selection, an interrupt, or closed input
/// ends it.
pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> AppResult<Exit>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        render::menu(console.out())?;
        let answer = match console.prompt("Select an option (1-9): ").await {
            Ok(answer) => answer,
            Err(err) if err.ends_session() => return farewell(console, Exit::Interrupted),
            // The unreadable line has already been consumed.
            Err(err) => {
                report_unexpected(console.out(), None, &err)?;
                continue;
            }
        };

        let Ok(choice) = answer.parse::<MenuChoice>() else {
            console.line("Invalid option. Please select 1-9.")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            return farewell(console, Exit::Requested);
        }

        tracing::debug!(?choice, "dispatching");
        match commands::dispatch(choice, state, console).await {
            Ok(()) => {}
            Err(err) if err.ends_session() => return farewell(console, Exit::Interrupted),
            Err(err) => report_failure(console.out(), choice, &err)?,
        }
    }
}

fn farewell<R, W>(console: &mut Console<R, W>, exit: Exit) -> AppResult<Exit>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match exit {
        Exit::Requested => {
            console.line("Thank you for using the E-commerce Database Management System!")?
        }
        Exit::Interrupted => console.line("\n\nGoodbye!")?,
    }
    Ok(exit)
}

pub fn report_failure(out: &mut impl Write, choice: MenuChoice, err: &AppError) -> AppResult<()> {
    match err {
        err if err.is_rejection() => writeln!(out, "{err}")?,
        AppError::OrmError(cause) => writeln!(out, "Error {}: {cause}", choice.activity())?,
        other => report_unexpected(out, Some(choice), other)?,
    }
    Ok(())
}

/// Failures outside the expected taxonomy. Printed, never escalated.
pub fn report_unexpected(
    out: &mut impl Write,
    choice: Option<MenuChoice>,
    err: &AppError,
) -> AppResult<()> {
    tracing::warn!(error = %err, ?choice, "unexpected failure");
    writeln!(out, "An unexpected error occurred: {err}")?;
    Ok(())
}
