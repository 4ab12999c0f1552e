//! Reference driver
//!
//! Feeds one message through the HTML, sensitive and face filters and prints
//! the final request and response.
//!
//! ```text
//! cargo run -p reference-driver
//! RUST_LOG=sieve=debug,sieve_core=trace cargo run -p reference-driver
//! ```

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use sieve::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Message fed through the chain.
const MESSAGE: &str = ":):,<script>,敏感,被就业,网络授课";

/// Seed of the response, annotated on the way back out.
const RESPONSE_SEED: &str = "response:";

/// Run one pass of the reference chain over `message`.
fn filter_message(message: &str) -> sieve::Result<(Request, Response)> {
    let mut chain = FilterChain::new();
    chain
        .add_filter(HtmlFilter::new())
        .add_filter(SensitiveFilter::new())
        .add_filter(FaceFilter::new());

    let mut request = Request::new(message);
    let mut response = Response::new(RESPONSE_SEED);
    chain.advance(&mut request, &mut response, &chain)?;

    Ok((request, response))
}

fn main() -> sieve::Result<()> {
    // Logs go to stderr, filtered strings to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reference_driver=info,sieve=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(input = MESSAGE, "filtering message");
    let (request, response) = filter_message(MESSAGE)?;

    println!("{request}");
    println!("{response}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn prints_reference_output() {
        let (request, response) = filter_message(MESSAGE).expect("filter");

        check!(
            request.text()
                == "^V^,[script],,就业,网络授课----HTMLFilter() ---sensitiveFilter()----FaceFilter()"
        );
        check!(response.text() == "response:---FaceFilter()---sensitiveFilter()---HTMLFilter()");
    }
}
