//! Error page rendered for unknown routes.

use http::status::StatusCode;
use leptos::prelude::*;
use leptos_router::components::A;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the `AppError`s found in `errors`.
///
/// On the server the response status is taken from the first error.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    if let (Some(first), Some(response)) =
        (errors.first(), use_context::<leptos_axum::ResponseOptions>())
    {
        response.set_status(first.status_code());
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };
    let lines = errors
        .into_iter()
        .map(|error| {
            let code = error.status_code();
            view! {
                <p class="text-xl tracking-widest text-gray-400 uppercase">{format!("{code}| {error}")}</p>
            }
        })
        .collect_view();

    view! {
        <div class="grid place-content-center px-4 h-full antialiased">
            <h1 class="mb-6 text-center">{heading}</h1>
            {lines}
            <div class="mt-6 text-center hover:underline">
                <A href="/">"Go back home"</A>
            </div>
        </div>
    }
}

/// Error page for a path no route matched.
pub fn not_found() -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(AppError::NotFound);
    component(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }
}
