//! Application state and core logic

use crate::client::{CookieStore, Endpoint, EndpointResolver, RatingClientTrait, CSRF_COOKIE};
use crate::error::SubmissionError;
use crate::state::{
    AlertTarget, AppState, CommentForm, DetailsState, FormEffect, FormFocus, ModalBody,
    OfferingContext, OfferingDetails, Rating,
};
use crate::ui::{CommentFormLayout, FormHit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion of a request dispatched in the background
#[derive(Debug)]
pub enum ClientEvent {
    CommentSubmitted(Result<(), SubmissionError>),
    OfferingLoaded(anyhow::Result<OfferingDetails>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    client: Arc<dyn RatingClientTrait>,
    resolver: EndpointResolver,
    cookies: Box<dyn CookieStore>,
    events_tx: mpsc::UnboundedSender<ClientEvent>,
    events_rx: mpsc::UnboundedReceiver<ClientEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(
        offering: OfferingContext,
        client: Arc<dyn RatingClientTrait>,
        resolver: EndpointResolver,
        cookies: Box<dyn CookieStore>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(offering),
            client,
            resolver,
            cookies,
            events_tx,
            events_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Screen area the modal is laid out in
    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Show a fresh comment form for the current offering
    pub fn open_comment_form(&mut self) {
        let form = CommentForm::new(self.state.offering.clone());
        self.state
            .show_modal("Comment", ModalBody::CommentForm(Box::new(form)));
    }

    /// Fetch the offering details in the background
    pub fn refresh_offering(&mut self) {
        if !matches!(self.state.details, DetailsState::Loaded(_)) {
            self.state.details = DetailsState::Loading;
        }

        let url = self
            .resolver
            .resolve(Endpoint::OfferingEntry, &self.state.offering);
        tracing::debug!("Loading offering from {url}");

        let cookies = self.cookies.header();
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.get_offering(&url, cookies).await;
            let _ = tx.send(ClientEvent::OfferingLoaded(result));
        });
    }

    /// Validate the open form and post it.
    ///
    /// Invalid input stays in the form with an inline error. Every valid
    /// call issues its own request; nothing is de-duplicated.
    pub fn submit_comment(&mut self) {
        let Some(form) = self.state.comment_form() else {
            return;
        };

        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!("Comment form rejected: {err}");
                self.state
                    .show_alert_error("Error", err.to_string(), AlertTarget::CommentForm);
                return;
            }
        };

        let url = self.resolver.resolve(Endpoint::RatingEntry, &form.offering);
        let csrf_token = self.cookies.get(CSRF_COOKIE);
        let cookies = self.cookies.header();
        if csrf_token.is_none() {
            tracing::warn!("No {CSRF_COOKIE} cookie available, submitting without X-CSRFToken");
        }

        if let Some(form) = self.state.comment_form_mut() {
            form.clear_error();
        }
        self.state.submissions_in_flight += 1;
        tracing::info!("Submitting comment to {url} with rating {}", submission.rating);
        if !submission.rating.is_rated() {
            tracing::debug!("No star selected, submitting rating 0");
        }

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client
                .submit_comment(&url, csrf_token, cookies, &submission)
                .await;
            let _ = tx.send(ClientEvent::CommentSubmitted(result));
        });
    }

    /// Apply every completed background request
    pub fn drain_client_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_client_event(event);
        }
    }

    pub fn handle_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::CommentSubmitted(result) => {
                self.state.submissions_in_flight =
                    self.state.submissions_in_flight.saturating_sub(1);
                match &result {
                    Ok(()) => tracing::info!("Comment submitted"),
                    Err(err) => tracing::warn!("Comment submission failed: {err}"),
                }
                let effects = CommentForm::outcome_effects(&result);
                self.apply_effects(effects);
            }
            ClientEvent::OfferingLoaded(Ok(details)) => {
                tracing::debug!("Offering loaded with {} comments", details.comments.len());
                self.state.details = DetailsState::Loaded(details);
                self.state.details_alert = None;
            }
            ClientEvent::OfferingLoaded(Err(err)) => {
                tracing::warn!("Failed to load offering: {err:#}");
                if matches!(self.state.details, DetailsState::Loading) {
                    self.state.details = DetailsState::NotLoaded;
                }
                self.state.show_alert_error(
                    "Error",
                    format!("{err:#}"),
                    AlertTarget::OfferingDetails,
                );
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<FormEffect>) {
        for effect in effects {
            match effect {
                FormEffect::CloseModal => self.state.hide_modal(),
                FormEffect::RefreshView => {
                    self.state.status_message = Some("Comment submitted".to_string());
                    self.refresh_offering();
                }
                FormEffect::ShowMessage { title, text } => self.state.show_message(title, text),
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.state.status_message = None;

        match self.state.modal.as_ref().map(|m| &m.body) {
            None => self.handle_details_key(key),
            Some(ModalBody::Message(_)) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                    self.state.hide_modal();
                }
            }
            Some(ModalBody::CommentForm(_)) => self.handle_comment_form_key(key),
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') => self.open_comment_form(),
            KeyCode::Char('r') => self.refresh_offering(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Esc => self.state.details_alert = None,
            _ => {}
        }
    }

    fn handle_comment_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.state.hide_modal();
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit_comment();
                return;
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit_comment();
                return;
            }
            _ => {}
        }

        let Some(form) = self.state.comment_form_mut() else {
            return;
        };

        match (form.focus, key.code) {
            (_, KeyCode::Tab) => form.next_field(),
            (_, KeyCode::BackTab) => form.prev_field(),
            (_, KeyCode::Char(_)) if ctrl => {}

            (FormFocus::Rating, KeyCode::Left | KeyCode::Char('h')) => form.step_hover(false),
            (FormFocus::Rating, KeyCode::Right | KeyCode::Char('l')) => form.step_hover(true),
            (FormFocus::Rating, KeyCode::Enter | KeyCode::Char(' ')) => {
                form.commit_hover();
                form.leave_stars();
            }
            (FormFocus::Rating, KeyCode::Char(c @ '0'..='5')) => {
                let value = c.to_digit(10).unwrap_or(0) as u8;
                form.set_rating(Rating::new(value));
                form.leave_stars();
            }
            (FormFocus::Rating, KeyCode::Down) => form.next_field(),

            (FormFocus::Title, KeyCode::Enter) => form.next_field(),
            (FormFocus::Comment, KeyCode::Enter) => form.comment.push_newline(),
            (FormFocus::Title | FormFocus::Comment, KeyCode::Char(c)) => {
                if let Some(field) = form.active_field_mut() {
                    field.push_char(c);
                }
            }
            (FormFocus::Title | FormFocus::Comment, KeyCode::Backspace) => {
                if let Some(field) = form.active_field_mut() {
                    field.pop_char();
                }
            }

            (FormFocus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => self.submit_comment(),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match self.state.modal.as_ref().map(|m| &m.body) {
            None => match mouse.kind {
                MouseEventKind::ScrollUp => self.state.scroll_up(),
                MouseEventKind::ScrollDown => self.state.scroll_down(),
                _ => {}
            },
            Some(ModalBody::Message(_)) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    self.state.hide_modal();
                }
            }
            Some(ModalBody::CommentForm(_)) => self.handle_comment_form_mouse(mouse),
        }
    }

    fn handle_comment_form_mouse(&mut self, mouse: MouseEvent) {
        let layout = CommentFormLayout::new(self.screen_area());
        let hit = layout.hit(mouse.column, mouse.row);

        let Some(form) = self.state.comment_form_mut() else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => match hit {
                Some(FormHit::Star(index)) => form.hover_star(index),
                _ if form.hovered().is_some() => form.leave_stars(),
                _ => {}
            },
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(FormHit::Star(index)) => {
                    form.set_focus(FormFocus::Rating);
                    form.click_star(index);
                    form.hover_star(index);
                }
                Some(FormHit::Title) => form.set_focus(FormFocus::Title),
                Some(FormHit::Comment) => form.set_focus(FormFocus::Comment),
                Some(FormHit::Submit) => {
                    form.set_focus(FormFocus::Submit);
                    self.submit_comment();
                }
                None => {}
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CookieJar, MockRatingClientTrait};
    use crate::error::FormError;
    use crate::state::{Alert, CommentSubmission, StarFill};
    use pretty_assertions::assert_eq;

    const RATING_URL: &str = "http://store.test/api/offering/offerings/acme/weather-api/1.0/review";
    const OFFERING_URL: &str = "http://store.test/api/offering/offerings/acme/weather-api/1.0";

    fn app_with(mock: MockRatingClientTrait, csrf_token: Option<&str>) -> App {
        let mut jar = CookieJar::default();
        if let Some(token) = csrf_token {
            jar.set(CSRF_COOKIE, token);
        }
        let mut app = App::new(
            OfferingContext::new("acme", "weather-api", "1.0"),
            Arc::new(mock),
            EndpointResolver::new("http://store.test"),
            Box::new(jar),
        );
        app.terminal_size = Some((30, 80));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Open the form and fill title and comment through the keyboard
    fn fill_form(app: &mut App, title: &str, comment: &str) {
        app.open_comment_form();
        app.handle_key(key(KeyCode::Tab));
        type_text(app, title);
        app.handle_key(key(KeyCode::Tab));
        type_text(app, comment);
    }

    async fn next_event(app: &mut App) -> ClientEvent {
        app.events_rx.recv().await.expect("client event")
    }

    fn body_json(submission: &CommentSubmission) -> String {
        serde_json::to_string(submission).unwrap()
    }

    #[tokio::test]
    async fn test_open_comment_form_starts_blank() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        app.open_comment_form();
        app.state.comment_form_mut().unwrap().click_star(2);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.state.modal.is_none());

        app.open_comment_form();
        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.title, "Comment");
        assert_eq!(app.state.comment_form().unwrap().rating(), Rating::UNRATED);
    }

    #[tokio::test]
    async fn test_blank_title_is_not_submitted() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment().times(0);
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "   ", "anything");
        app.handle_key(ctrl('s'));

        let form = app.state.comment_form().expect("form stays open");
        assert_eq!(
            form.error,
            Some(Alert::new("Error", FormError::MissingFields.to_string()))
        );
        assert_eq!(form.error.as_ref().unwrap().text, "Missing required fields");
        assert_eq!(app.state.submissions_in_flight, 0);
        assert!(app.events_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_blank_comment_is_not_submitted() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment().times(0);
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "Great", "");
        app.submit_comment();

        assert!(app.state.comment_form().unwrap().error.is_some());
        assert_eq!(app.state.submissions_in_flight, 0);
    }

    #[tokio::test]
    async fn test_successful_submission_closes_and_refreshes() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .withf(|url, token, cookies, submission| {
                url == RATING_URL
                    && token.as_deref() == Some("tok")
                    && cookies.as_deref() == Some("csrftoken=tok")
                    && body_json(submission)
                        == r#"{"title":"Great","comment":"Works well","rating":0}"#
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        mock.expect_get_offering()
            .withf(|url, cookies| {
                url == OFFERING_URL && cookies.as_deref() == Some("csrftoken=tok")
            })
            .times(1)
            .returning(|_, _| {
                Ok(OfferingDetails {
                    rating: 4.0,
                    ..Default::default()
                })
            });
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "Great", "Works well");
        app.handle_key(ctrl('s'));
        assert_eq!(app.state.submissions_in_flight, 1);

        let event = next_event(&mut app).await;
        assert!(matches!(event, ClientEvent::CommentSubmitted(Ok(()))));
        app.handle_client_event(event);

        assert!(app.state.modal.is_none());
        assert_eq!(app.state.submissions_in_flight, 0);
        assert_eq!(app.state.status_message.as_deref(), Some("Comment submitted"));
        assert!(matches!(app.state.details, DetailsState::Loading));

        let event = next_event(&mut app).await;
        app.handle_client_event(event);
        let details = app.state.loaded_details().expect("details loaded");
        assert_eq!(details.average_rating(), Rating::new(4));
    }

    #[tokio::test]
    async fn test_rejected_submission_shows_server_message() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .times(1)
            .returning(|_, _, _, _| {
                Err(SubmissionError::rejected(
                    400,
                    r#"{"message":"Duplicate comment"}"#,
                ))
            });
        mock.expect_get_offering().times(0);
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "Great", "Works well");
        app.submit_comment();
        let event = next_event(&mut app).await;
        app.handle_client_event(event);

        let modal = app.state.modal.as_ref().expect("error dialog");
        assert_eq!(modal.title, "Error");
        assert!(matches!(&modal.body, ModalBody::Message(text) if text == "Duplicate comment"));
        assert!(app.state.comment_form().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_shows_error_dialog() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .times(1)
            .returning(|_, _, _, _| Err(SubmissionError::Transport("connection refused".into())));
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "Great", "Works well");
        app.submit_comment();
        let event = next_event(&mut app).await;
        app.handle_client_event(event);

        let modal = app.state.modal.as_ref().unwrap();
        assert_eq!(modal.title, "Error");
        assert!(matches!(&modal.body, ModalBody::Message(text) if text == "connection refused"));
    }

    #[tokio::test]
    async fn test_mouse_rating_is_submitted() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .withf(|_, _, _, submission| submission.rating == Rating::new(2))
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        mock.expect_get_offering()
            .returning(|_, _| Ok(OfferingDetails::default()));
        let mut app = app_with(mock, Some("tok"));
        fill_form(&mut app, "Great", "Works well");

        // Stars sit at row 7, columns 12, 15, 18, 21, 24 on an 80x30 screen
        app.handle_mouse(mouse(MouseEventKind::Moved, 21, 7));
        {
            let form = app.state.comment_form().unwrap();
            assert_eq!(form.hovered(), Some(3));
            assert_eq!(form.rating(), Rating::UNRATED);
        }

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 7));
        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
        {
            let form = app.state.comment_form().unwrap();
            assert_eq!(form.hovered(), None);
            assert_eq!(form.rating(), Rating::new(2));
            assert_eq!(
                form.star_fills(),
                [
                    StarFill::Filled,
                    StarFill::Filled,
                    StarFill::Empty,
                    StarFill::Empty,
                    StarFill::Empty
                ]
            );
        }

        // Click the Submit button
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 22));
        let event = next_event(&mut app).await;
        assert!(matches!(event, ClientEvent::CommentSubmitted(Ok(()))));
    }

    #[tokio::test]
    async fn test_keyboard_rating() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        app.open_comment_form();

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        let form = app.state.comment_form().unwrap();
        assert_eq!(form.rating(), Rating::new(2));
        assert_eq!(form.hovered(), None);

        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.state.comment_form().unwrap().rating(), Rating::MAX);
        app.handle_key(key(KeyCode::Char('0')));
        assert_eq!(app.state.comment_form().unwrap().rating(), Rating::UNRATED);
    }

    #[tokio::test]
    async fn test_typing_goes_to_focused_field() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        fill_form(&mut app, "Hi", "a");
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "b");
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "c");

        let form = app.state.comment_form().unwrap();
        assert_eq!(form.title.as_text(), "Hi");
        assert_eq!(form.comment.as_text(), "a\nc");
    }

    #[tokio::test]
    async fn test_submit_without_csrf_cookie() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .withf(|_, token, cookies, _| token.is_none() && cookies.is_none())
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        mock.expect_get_offering()
            .returning(|_, _| Ok(OfferingDetails::default()));
        let mut app = app_with(mock, None);

        fill_form(&mut app, "Great", "Works well");
        app.submit_comment();
        let event = next_event(&mut app).await;
        assert!(matches!(event, ClientEvent::CommentSubmitted(Ok(()))));
    }

    #[tokio::test]
    async fn test_session_cookie_sent_with_submission() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .withf(|_, token, cookies, _| {
                token.as_deref() == Some("tok")
                    && cookies.as_deref() == Some("csrftoken=tok; sessionid=s3ss")
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let mut jar = CookieJar::default();
        jar.set(CSRF_COOKIE, "tok");
        jar.set("sessionid", "s3ss");
        let mut app = App::new(
            OfferingContext::new("acme", "weather-api", "1.0"),
            Arc::new(mock),
            EndpointResolver::new("http://store.test"),
            Box::new(jar),
        );

        fill_form(&mut app, "Great", "Works well");
        app.submit_comment();
        let event = next_event(&mut app).await;
        assert!(matches!(event, ClientEvent::CommentSubmitted(Ok(()))));
    }

    #[tokio::test]
    async fn test_repeated_submit_sends_each_time() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_submit_comment()
            .times(2)
            .returning(|_, _, _, _| Ok(()));
        mock.expect_get_offering()
            .returning(|_, _| Ok(OfferingDetails::default()));
        let mut app = app_with(mock, Some("tok"));

        fill_form(&mut app, "Great", "Works well");
        app.submit_comment();
        app.submit_comment();
        assert_eq!(app.state.submissions_in_flight, 2);

        for _ in 0..2 {
            let event = next_event(&mut app).await;
            assert!(matches!(event, ClientEvent::CommentSubmitted(Ok(()))));
        }
    }

    #[tokio::test]
    async fn test_offering_load_failure_shows_alert() {
        let mut mock = MockRatingClientTrait::new();
        mock.expect_get_offering()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("Offering not found")));
        let mut app = app_with(mock, None);

        app.handle_key(key(KeyCode::Char('r')));
        assert!(matches!(app.state.details, DetailsState::Loading));
        let event = next_event(&mut app).await;
        app.handle_client_event(event);

        assert!(matches!(app.state.details, DetailsState::NotLoaded));
        assert_eq!(
            app.state.details_alert,
            Some(Alert::new("Error", "Offering not found"))
        );
    }

    #[tokio::test]
    async fn test_message_dialog_dismissed_by_escape() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        app.state.show_message("Error", "Duplicate comment");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.state.modal.is_none());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_quit_only_without_modal() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        app.open_comment_form();
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.state.comment_form().unwrap().title.as_text(), "q");

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_drain_applies_pending_events() {
        let mut app = app_with(MockRatingClientTrait::new(), None);
        app.open_comment_form();
        app.state.submissions_in_flight = 1;
        app.events_tx
            .send(ClientEvent::CommentSubmitted(Err(SubmissionError::rejected(
                403,
                r#"{"message":"CSRF verification failed"}"#,
            ))))
            .unwrap();

        app.drain_client_events();
        let modal = app.state.modal.as_ref().unwrap();
        assert!(matches!(&modal.body, ModalBody::Message(text) if text == "CSRF verification failed"));
        assert_eq!(app.state.submissions_in_flight, 0);
    }
}
