//! App Root Component
//!
//! Builds the board controller and wires component callbacks into it.

use activity_board::{BoardController, SignupForm, UiConfig};
use leptos::*;
use std::rc::Rc;

use crate::api::{self, GlooActivitiesClient};
use crate::components::{ActivityList, MessagePanel, SearchBox, SignupPanel};
use crate::state::{provide_board_state, GlooScheduler, LeptosSurface};

type Board = BoardController<GlooActivitiesClient, LeptosSurface, GlooScheduler>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_board_state();

    let client = GlooActivitiesClient::new(api::get_api_base());
    let board: Rc<Board> = Rc::new(BoardController::new(
        client,
        LeptosSurface::new(state),
        GlooScheduler,
        UiConfig::default(),
    ));

    {
        let board = Rc::clone(&board);
        spawn_local(async move { board.start().await });
    }

    let on_search = {
        let board = Rc::clone(&board);
        Callback::new(move |text: String| board.on_search_input(&text))
    };

    let on_view = {
        let board = Rc::clone(&board);
        Callback::new(move |activity: String| {
            let board = Rc::clone(&board);
            spawn_local(async move {
                board.view_participants(&activity).await;
            });
        })
    };

    let on_submit = {
        let board = Rc::clone(&board);
        Callback::new(move |form: SignupForm| {
            let board = Rc::clone(&board);
            spawn_local(async move {
                board.submit_signup(&form).await;
            });
        })
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <header class="text-center py-8">
                <h1 class="text-3xl font-bold">"Mergington High School"</h1>
                <h2 class="text-xl text-gray-400">"Extracurricular Activities"</h2>
            </header>

            <main class="container mx-auto px-4 pb-12 grid gap-8 md:grid-cols-2">
                <section id="activities-container">
                    <h3 class="text-xl font-semibold mb-4">"Available Activities"</h3>
                    <SearchBox on_search=on_search />
                    <ActivityList on_view=on_view />
                </section>

                <section id="signup-container">
                    <h3 class="text-xl font-semibold mb-4">"Sign Up for an Activity"</h3>
                    <SignupPanel on_submit=on_submit />
                    <MessagePanel />
                </section>
            </main>
        </div>
    }
}
