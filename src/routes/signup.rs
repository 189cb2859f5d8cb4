//! Sign-up route. It validates every field locally, shows all messages at once,
//! and only then submits the registration with the optional profile picture.
//! A successful registration sends the user to the login page.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, AuthLayout, Button, Field, ProfilePictureSelector},
    features::{
        auth::{
            client,
            signup::{FieldErrors, SignUpField, SignUpForm},
        },
        profile_picture::Selection,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use web_sys::File;

/// Renders the sign-up form and drives the registration request.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let picture = RwSignal::new_local(None::<File>);
    let errors = RwSignal::new(FieldErrors::default());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let field_error = move |field: SignUpField| {
        Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
    };
    let clear_error = move |field: SignUpField| {
        Callback::new(move |()| {
            if errors.with_untracked(|errors| errors.get(field).is_some()) {
                errors.update(|errors| errors.clear(field));
            }
        })
    };

    let on_image_select = move |selection: Selection<File>| {
        let file = match selection {
            Selection::Chosen { file, .. } => Some(file),
            Selection::Cleared => None,
        };
        picture.set(file);
        if errors.with_untracked(|errors| errors.get(SignUpField::ProfilePicture).is_some()) {
            errors.update(|errors| errors.clear(SignUpField::ProfilePicture));
        }
    };

    // The file handle is not `Send`, so it is read here instead of travelling
    // with the action input.
    let signup_action = Action::new_local(move |form: &SignUpForm| {
        let form = form.clone();
        let picture = picture.get_untracked();
        async move { client::register(&form, picture.as_ref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => navigate(paths::LOGIN, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = SignUpForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let found = form.validate();
        let valid = found.is_empty();
        if !valid {
            tracing::debug!(
                fields = ?found.fields().map(SignUpField::as_str).collect::<Vec<_>>(),
                "sign-up form invalid"
            );
        }
        errors.set(found);
        if !valid {
            return;
        }

        signup_action.dispatch(form);
    };

    view! {
        <AuthLayout
            headline="Join ExpenseTracker"
            tagline="Start your journey towards better financial management today."
            title="Create Account"
            subtitle="Join us and start managing your expenses"
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
                <div class="flex justify-center mb-8">
                    <ProfilePictureSelector
                        on_image_select=on_image_select
                        error=field_error(SignUpField::ProfilePicture)
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <Field
                        id="firstName"
                        label="First Name"
                        input_type="text"
                        icon="person"
                        value=first_name
                        placeholder="John"
                        autocomplete="given-name"
                        error=field_error(SignUpField::FirstName)
                        on_edit=clear_error(SignUpField::FirstName)
                    />
                    <Field
                        id="lastName"
                        label="Last Name"
                        input_type="text"
                        icon="person"
                        value=last_name
                        placeholder="Doe"
                        autocomplete="family-name"
                        error=field_error(SignUpField::LastName)
                        on_edit=clear_error(SignUpField::LastName)
                    />
                </div>
                <Field
                    id="email"
                    label="Email Address"
                    input_type="email"
                    icon="mail"
                    value=email
                    placeholder="john.doe@example.com"
                    autocomplete="email"
                    error=field_error(SignUpField::Email)
                    on_edit=clear_error(SignUpField::Email)
                />
                <Field
                    id="password"
                    label="Password"
                    input_type="password"
                    icon="lock"
                    value=password
                    autocomplete="new-password"
                    revealable=true
                    error=field_error(SignUpField::Password)
                    on_edit=clear_error(SignUpField::Password)
                />
                <Field
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    icon="lock"
                    value=confirm_password
                    autocomplete="new-password"
                    revealable=true
                    error=field_error(SignUpField::ConfirmPassword)
                    on_edit=clear_error(SignUpField::ConfirmPassword)
                />
                <div class="pt-4">
                    <Button
                        button_type="submit"
                        busy=signup_action.pending()
                        busy_label="Creating Account..."
                    >
                        "Create Account"
                    </Button>
                </div>
                <div class="text-center pt-6 border-t border-gray-200">
                    <p class="text-sm text-gray-600">
                        "Already have an account? "
                        <A href=paths::LOGIN {..} class=Theme::LINK>
                            "Login"
                        </A>
                    </p>
                </div>
            </form>
        </AuthLayout>
    }
}
