//! Sequential walk through the promisified API.

use std::io::{self, Write};

use promisify_core::OperationError;

use crate::api::{Api, Person};
use crate::display::Printer;

/// Failure while running the exercise.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Prints admins, users, server time and queue length, stopping at the first failure.
///
/// # Errors
///
/// Returns the first relayed operation failure or writer error.
pub async fn start_the_app<W: Write>(api: &Api, printer: &mut Printer<W>) -> Result<(), RunError> {
    printer.header("Admins:")?;
    for admin in api.request_admins().await? {
        printer.person(&Person::from(admin))?;
    }
    printer.blank()?;

    printer.header("Users:")?;
    for user in api.request_users().await? {
        printer.person(&Person::from(user))?;
    }
    printer.blank()?;

    printer.header("Server time:")?;
    printer.server_time(api.request_current_server_time().await?)?;
    printer.blank()?;

    printer.header("Coffee machine queue length:")?;
    printer.queue_length(api.request_coffee_machine_queue_length().await?)?;

    Ok(())
}

/// Runs [`start_the_app`] and prints the final report.
///
/// A relayed operation failure is reported, not returned.
///
/// # Errors
///
/// Returns writer errors only.
pub async fn run<W: Write>(api: &Api, printer: &mut Printer<W>) -> Result<(), RunError> {
    let outcome = match start_the_app(api, printer).await {
        Ok(()) => Ok(()),
        Err(RunError::Operation(e)) => {
            tracing::info!(error = %e, "exercise stopped on a reported failure");
            Err(e)
        }
        Err(e @ RunError::Io(_)) => return Err(e),
    };
    printer.report(&outcome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Local;
    use promisify_core::{promisify, Completion, DeferredOperation, TaggedResult};

    use super::*;
    use crate::api::OldApi;
    use crate::clock::FixedClock;
    use crate::display::format_server_time;

    const NOW: u64 = 1_700_000_000_000;

    async fn transcript(api: &Api) -> String {
        let mut printer = Printer::new(Vec::new(), false);
        run(api, &mut printer).await.unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    fn preamble() -> String {
        format!(
            "Admins:\n - Jane Doe, 32, Administrator\n - Bruce Willis, 64, World saver\n\n\
             Users:\n - Max Mustermann, 25, Chimney sweep\n - Kate Müller, 23, Astronaut\n\n\
             Server time:\n   {}\n\n\
             Coffee machine queue length:\n",
            format_server_time(NOW, &Local)
        )
    }

    #[tokio::test]
    async fn stops_at_queue_length_failure_and_acknowledges_it() {
        let api = Api::new(&OldApi::new(Arc::new(FixedClock(NOW))));
        let out = transcript(&api).await;
        assert_eq!(
            out,
            format!(
                "{}Error: \"Numeric value has exceeded Number.MAX_SAFE_INTEGER.\", \
                 but it's fine, sometimes errors are inevitable.\n",
                preamble()
            )
        );
    }

    #[tokio::test]
    async fn reports_success_when_every_request_succeeds() {
        let old = OldApi::new(Arc::new(FixedClock(NOW)));
        let queue: DeferredOperation<u64> =
            promisify(|done: Completion<u64>| done(TaggedResult::success(3)));
        let api = Api::from_operations(
            promisify(old.request_admins()),
            promisify(old.request_users()),
            promisify(old.request_current_server_time()),
            queue,
        );

        let out = transcript(&api).await;
        assert_eq!(out, format!("{}   3\nSuccess!\n", preamble()));
    }

    #[tokio::test]
    async fn early_failure_skips_remaining_sections() {
        let old = OldApi::new(Arc::new(FixedClock(NOW)));
        let admins: DeferredOperation<Vec<crate::api::Admin>> =
            promisify(|done: Completion<Vec<crate::api::Admin>>| {
                done(TaggedResult::error("admin directory offline"));
            });
        let api = Api::from_operations(
            admins,
            promisify(old.request_users()),
            promisify(old.request_current_server_time()),
            promisify(old.request_coffee_machine_queue_length()),
        );

        let out = transcript(&api).await;
        assert_eq!(
            out,
            "Admins:\nError: \"admin directory offline\", \
             but it's fine, sometimes errors are inevitable.\n"
        );
    }

    #[tokio::test]
    async fn abandoned_request_is_reported_not_hung() {
        let old = OldApi::new(Arc::new(FixedClock(NOW)));
        let users: DeferredOperation<Vec<crate::api::User>> =
            promisify(|done: Completion<Vec<crate::api::User>>| drop(done));
        let api = Api::from_operations(
            promisify(old.request_admins()),
            users,
            promisify(old.request_current_server_time()),
            promisify(old.request_coffee_machine_queue_length()),
        );

        let out = transcript(&api).await;
        assert!(out.contains("Users:\nError: \"legacy operation dropped its completion handler"));
    }
}
