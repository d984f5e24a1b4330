//! Incident dashboard screen (`slaboard dashboard`)
//!
//! Renders whatever the [`Dashboard`] coordinator currently holds and turns
//! key presses into coordinator calls. Backend work runs in async handlers;
//! each one bumps a revision counter when it finishes so the screen redraws.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::HttpBackend;
use crate::dashboard::Dashboard;
use crate::tui::components::{
    ChatPane, FilterBar, Footer, Header, IncidentTable, MetricsPanel, Toast, render_toast,
};
use crate::tui::model::{
    DashboardAction, DashboardState, Focus, clamp_selection, compute_shortcuts, key_to_action,
    reduce_dashboard_state, selected_row,
};
use crate::tui::theme::theme;

/// Table reload requests issued from the keyboard or the search box
#[derive(Debug, Clone)]
enum TableRequest {
    Search(String),
    CycleFilter(isize),
    SelectFilter(String),
    Refresh,
}

#[derive(Default, Props)]
pub struct SlaDashboardProps {
    pub dashboard: Option<Arc<Dashboard<HttpBackend>>>,
    pub api_url: String,
}

/// Main dashboard component
///
/// Layout:
/// ```text
/// +------------------------------------------------------+
/// | Header                                               |
/// | MetricsPanel                                         |
/// | FilterBar  [1:all] 2:breached ...   / search         |
/// +-------------------------------------+----------------+
/// | IncidentTable                       | ChatPane       |
/// +-------------------------------------+----------------+
/// | Footer                                               |
/// +------------------------------------------------------+
/// ```
#[component]
pub fn SlaDashboard<'a>(props: &SlaDashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let Some(dashboard) = props.dashboard.clone() else {
        return element! {
            View(width, height, justify_content: JustifyContent::Center, align_items: AlignItems::Center) {
                Text(content: "No backend configured", color: theme.text_dimmed)
            }
        }
        .into_any();
    };

    let mut ui: State<DashboardState> = hooks.use_state(DashboardState::default);
    let mut revision = hooks.use_state(|| 0u64);
    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut search_text = hooks.use_state(String::new);
    let mut applied_search = hooks.use_state(String::new);
    let mut chat_input = hooks.use_state(String::new);

    // Redraw after every countdown tick
    hooks.use_future({
        let dashboard = Arc::clone(&dashboard);
        async move {
            let mut ticks = dashboard.subscribe_ticks();
            while ticks.changed().await.is_ok() {
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let startup_handler: Handler<()> = hooks.use_async_handler({
        let dashboard = Arc::clone(&dashboard);
        move |()| {
            let dashboard = Arc::clone(&dashboard);
            let mut revision = revision;
            let mut toast = toast;
            async move {
                let (metrics_ok, outcome) =
                    futures::future::join(dashboard.load_metrics(), dashboard.refresh()).await;
                if let Some(failure) = Toast::for_load(outcome) {
                    toast.set(Some(failure));
                } else if !metrics_ok {
                    toast.set(Some(Toast::warning("Metrics unavailable")));
                }
                revision.set(revision.get().wrapping_add(1));

                dashboard.prime_chat().await;
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let table_handler: Handler<TableRequest> = hooks.use_async_handler({
        let dashboard = Arc::clone(&dashboard);
        move |request: TableRequest| {
            let dashboard = Arc::clone(&dashboard);
            let mut revision = revision;
            let mut toast = toast;
            async move {
                let outcome = match request {
                    TableRequest::Search(text) => dashboard.search_input(&text).await,
                    TableRequest::CycleFilter(delta) => dashboard.cycle_filter(delta).await,
                    TableRequest::SelectFilter(value) => match dashboard.select_filter(&value).await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            toast.set(Some(Toast::error(e.to_string())));
                            return;
                        }
                    },
                    TableRequest::Refresh => {
                        let (_, outcome) =
                            futures::future::join(dashboard.load_metrics(), dashboard.refresh())
                                .await;
                        outcome
                    }
                };
                if let Some(failure) = Toast::for_load(outcome) {
                    toast.set(Some(failure));
                }
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let chat_handler: Handler<String> = hooks.use_async_handler({
        let dashboard = Arc::clone(&dashboard);
        move |message: String| {
            let dashboard = Arc::clone(&dashboard);
            let mut revision = revision;
            async move {
                dashboard.send_chat(&message).await;
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let detail_handler: Handler<String> = hooks.use_async_handler({
        let dashboard = Arc::clone(&dashboard);
        move |ticket_id: String| {
            let dashboard = Arc::clone(&dashboard);
            let mut toast = toast;
            async move {
                let next = match dashboard.fetch_ticket(&ticket_id).await {
                    Ok(ticket) => Toast::for_ticket(&ticket),
                    Err(e) => Toast::error(format!("Could not load {ticket_id}: {e}")),
                };
                toast.set(Some(next));
            }
        }
    });

    let mut started = hooks.use_state(|| false);
    if !started.get() {
        started.set(true);
        startup_handler.clone()(());
    }

    // Every edit to the search box reloads the table
    let current_search = search_text.to_string();
    if current_search != applied_search.to_string() {
        applied_search.set(current_search.clone());
        table_handler.clone()(TableRequest::Search(current_search));
    }

    let view = dashboard.table_view();
    let metrics = dashboard.metrics_view();
    let query = dashboard.query();
    let messages = dashboard.chat_messages();
    let row_count = view.lines.len();

    // Header (1) + metrics (3) + filter bar (1) + table borders and header (3) + footer (1)
    let list_height = (height as usize).saturating_sub(9);

    let current = ui.get();
    let clamped = clamp_selection(current, row_count, list_height);
    if clamped != current {
        ui.set(clamped);
    }
    let state = clamped;

    hooks.use_terminal_events({
        let dashboard = Arc::clone(&dashboard);
        let view = view.clone();
        let filters = query.filters().to_vec();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let state = ui.get();
                let Some(action) = key_to_action(code, modifiers, &state) else {
                    return;
                };
                ui.set(reduce_dashboard_state(state, action, row_count, list_height));

                match action {
                    DashboardAction::ClearSearchAndExit => search_text.set(String::new()),
                    DashboardAction::SubmitChat => {
                        let message = chat_input.to_string();
                        if !message.trim().is_empty() {
                            chat_input.set(String::new());
                            chat_handler(message);
                        }
                    }
                    DashboardAction::NextFilter => table_handler(TableRequest::CycleFilter(1)),
                    DashboardAction::PrevFilter => table_handler(TableRequest::CycleFilter(-1)),
                    DashboardAction::SelectFilter(index) => {
                        if let Some(value) = filters.get(index) {
                            table_handler(TableRequest::SelectFilter(value.clone()));
                        }
                    }
                    DashboardAction::Refresh => table_handler(TableRequest::Refresh),
                    DashboardAction::CompleteSelected => {
                        if let Some((id, ticket_id)) = selected_row(&view, state.selected_index) {
                            let note = Toast::for_completion(&ticket_id, dashboard.complete(id));
                            toast.set(Some(note));
                            revision.set(revision.get().wrapping_add(1));
                        }
                    }
                    DashboardAction::ShowDetail => {
                        if let Some((_, ticket_id)) = selected_row(&view, state.selected_index) {
                            detail_handler(ticket_id);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if state.should_exit {
        system.exit();
    }

    let shortcuts = compute_shortcuts(state.focus);
    let toast_state = toast.read().clone();
    let selector = query.selector().to_string();
    let data_rows = view.data_row_count();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(api_url: props.api_url.clone(), selector, row_count: data_rows)

            MetricsPanel(metrics)

            FilterBar(
                filters: query.filters().to_vec(),
                active: query.active_filter_index(),
                search: Some(search_text),
                search_focused: state.focus == Focus::Search,
            )

            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Row) {
                IncidentTable(
                    view,
                    selected_index: state.selected_index,
                    scroll_offset: state.scroll_offset,
                    visible_height: list_height,
                    has_focus: state.focus == Focus::Table,
                )
                ChatPane(
                    messages,
                    input: Some(chat_input),
                    has_focus: state.focus == Focus::Chat,
                    visible_height: list_height,
                )
            }

            #(render_toast(&toast_state))

            Footer(shortcuts)
        }
    }
    .into_any()
}
