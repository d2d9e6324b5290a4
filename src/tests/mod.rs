mod app {
    mod runtime_tests;
}

mod form {
    mod controller_tests;
    mod ticket_tests;
}

mod presentation {
    mod render_tests;
}
