mod book_form;
mod loan_form;
mod login_form;
mod register_form;
