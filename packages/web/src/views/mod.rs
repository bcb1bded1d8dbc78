mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod movie_detail;
pub use movie_detail::MovieDetail;

mod protected;
pub use protected::Protected;
