use super::*;

fn user(email: &str) -> User {
    User::new(email).unwrap()
}

fn view_of(session: RwSignal<Session>) -> ActiveView {
    session.with(Session::active_view)
}

#[test]
fn callbacks_login_then_logout() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        let (on_login, on_logout) = session_callbacks(session);
        assert_eq!(view_of(session), ActiveView::Login);

        on_login.run(user("a@b.com"));
        assert_eq!(view_of(session), ActiveView::Dashboard(user("a@b.com")));

        on_logout.run(());
        assert_eq!(view_of(session), ActiveView::Login);
    });
}

#[test]
fn logout_callback_without_login_keeps_login_view() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        let (_, on_logout) = session_callbacks(session);

        on_logout.run(());
        assert_eq!(view_of(session), ActiveView::Login);
        assert_eq!(session.get_untracked(), Session::Absent);
    });
}

#[test]
fn second_login_callback_wins() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        let (on_login, _) = session_callbacks(session);

        on_login.run(user("x@y.com"));
        on_login.run(user("z@w.com"));
        assert_eq!(view_of(session), ActiveView::Dashboard(user("z@w.com")));
    });
}

#[test]
fn login_callback_after_logout_presents_new_user() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        let (on_login, on_logout) = session_callbacks(session);

        on_login.run(user("a@b.com"));
        on_logout.run(());
        on_logout.run(());
        on_login.run(user("c@d.com"));
        assert_eq!(view_of(session), ActiveView::Dashboard(user("c@d.com")));
    });
}
