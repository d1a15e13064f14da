mod form;
pub use form::FormView;

mod result;
pub use result::ResultView;

mod sign_in;
pub use sign_in::SignInView;
