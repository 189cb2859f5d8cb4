//! Login route. It posts the credentials once, stores the returned token and
//! user through the session context, and lands on the dashboard. The submit
//! button stays disabled while the request is in flight; a failure re-enables
//! the form with the server's message.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, AuthLayout, Button, Field},
    features::{
        auth::{client, types::LoginRequest},
        session::state::use_session,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result.and_then(|response| session.sign_in(&response)) {
                Ok(()) => {
                    tracing::info!("login succeeded");
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some(AppError::Rejected(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AuthLayout
            headline="ExpenseTracker"
            tagline="Take control of your finances with our intuitive tracking solution"
            title="Welcome Back"
            subtitle="Please sign in to your account"
        >
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
            <form class="space-y-6" on:submit=on_submit>
                <Field
                    id="email"
                    label="Email Address"
                    input_type="email"
                    icon="mail"
                    value=email
                    placeholder="you@example.com"
                    autocomplete="email"
                    required=true
                />
                <Field
                    id="password"
                    label="Password"
                    input_type="password"
                    icon="lock"
                    value=password
                    autocomplete="current-password"
                    revealable=true
                    required=true
                />
                <Button button_type="submit" busy=login_action.pending()>
                    "Login"
                </Button>
            </form>
            <p class="text-center text-gray-600 mt-8">
                "Don't have an account? "
                <A href=paths::SIGN_UP {..} class=Theme::LINK>
                    "Sign up"
                </A>
            </p>
        </AuthLayout>
    }
}
