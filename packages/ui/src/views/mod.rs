mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod search;
pub use search::SearchView;

mod movie_detail;
pub use movie_detail::MovieDetailView;

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-error"
    } else {
        ""
    }
}
