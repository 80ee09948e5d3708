//! Exercises Page
//!
//! Hosts the memory pattern game.

use leptos::*;
use neurogrow::game::{tile_name, Difficulty, GameStatus};

use crate::components::GameStat;
use crate::state::game::{grid_class, start_label, status_badge, tile_class, GameController};
use crate::state::global::use_global_state;

/// Exercises page component
#[component]
pub fn Exercises() -> impl IntoView {
    let game = GameController::new(use_global_state());
    on_cleanup(move || game.dispose());

    view! {
        <div class="px-4 py-8 lg:px-8 max-w-7xl mx-auto">
            <div class="text-center mb-8">
                <h1 class="text-3xl md:text-4xl font-bold mb-4">"Brain Training Exercises"</h1>
                <p class="text-xl text-gray-600">"Challenge yourself with adaptive cognitive workouts"</p>
            </div>
            <MemoryGame game=game />
        </div>
    }
}

#[component]
fn MemoryGame(game: GameController) -> impl IntoView {
    let state = game.state;

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            // Header card
            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <div class="text-center mb-6">
                    <h2 class="text-2xl font-semibold">"🧠 Memory Pattern Challenge"</h2>
                    <p class="text-gray-600">
                        "Watch the pattern, then repeat it back. Each level gets progressively harder!"
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                    <GameStat
                        label="Level"
                        value=Signal::derive(move || state.with(|s| s.level.to_string()))
                        accent="text-primary"
                    />
                    <GameStat
                        label="Score"
                        value=Signal::derive(move || state.with(|s| s.score.to_string()))
                        accent="text-yellow-600"
                    />
                    <GameStat
                        label="Pattern Length"
                        value=Signal::derive(move || state.with(|s| s.sequence.len().to_string()))
                        accent="text-green-600"
                    />
                    <GameStat
                        label="Time Left"
                        value=Signal::derive(move || state.with(|s| format!("{}s", s.time_left)))
                        accent="text-purple-600"
                    />
                </div>

                <DifficultySelector game=game />

                // Status badge
                <div class="text-center mb-6">
                    {move || {
                        let (label, class) = status_badge(state.with(|s| s.status));
                        view! {
                            <span class=format!("inline-block text-lg px-4 py-2 rounded-full {}", class)>
                                {label}
                            </span>
                        }
                    }}
                </div>

                // Progress while replaying
                <Show when=move || state.with(|s| s.status == GameStatus::AwaitingInput)>
                    <div class="mb-6">
                        <div class="w-full h-3 bg-gray-200 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-primary transition-all"
                                style=move || format!("width: {:.0}%", state.with(|s| s.progress()) * 100.0)
                            />
                        </div>
                        <div class="flex justify-between text-sm text-gray-600 mt-1">
                            <span>
                                {move || state.with(|s| {
                                    format!("Progress: {}/{}", s.player_input.len(), s.sequence.len())
                                })}
                            </span>
                            <span>{move || state.with(|s| format!("⏱ {}s", s.time_left))}</span>
                        </div>
                    </div>
                </Show>
            </section>

            // Tile grid
            <section class="bg-white rounded-xl p-8 border border-gray-200">
                <div class=move || grid_class(game.setting().columns())>
                    {move || {
                        (0..game.setting().tile_count)
                            .map(|tile| view! { <Tile game=game tile=tile /> })
                            .collect_view()
                    }}
                </div>
            </section>

            // Controls
            <div class="flex justify-center gap-4">
                <Show when=move || !state.with(|s| s.is_playing())>
                    <button
                        on:click=move |_| game.start()
                        class="bg-primary hover:bg-primary/90 text-white px-6 py-3 rounded-lg font-medium"
                    >
                        {move || format!("▶ {}", start_label(state.with(|s| s.status)))}
                    </button>
                </Show>
                <button
                    on:click=move |_| game.reset()
                    class="px-6 py-3 rounded-lg border border-gray-300 hover:bg-gray-100 font-medium"
                >
                    "↺ Reset"
                </button>
            </div>
        </div>
    }
}

#[component]
fn DifficultySelector(game: GameController) -> impl IntoView {
    let playing = move || game.state.with(|s| s.is_playing());

    view! {
        <div class="flex justify-center gap-2 mb-6">
            {Difficulty::ALL
                .into_iter()
                .map(|difficulty| {
                    let class = move || {
                        let base = "px-3 py-1 rounded-md text-sm font-medium capitalize transition-colors \
                                    disabled:opacity-50 disabled:cursor-not-allowed";
                        if game.difficulty.get() == difficulty {
                            format!("{} bg-primary text-white", base)
                        } else {
                            format!("{} border border-gray-300 hover:bg-gray-100", base)
                        }
                    };
                    view! {
                        <button
                            class=class
                            disabled=playing
                            on:click=move |_| game.select_difficulty(difficulty)
                        >
                            {difficulty.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Tile(game: GameController, tile: usize) -> impl IntoView {
    let state = game.state;

    view! {
        <button
            class=move || state.with(|s| tile_class(tile, s))
            disabled=move || state.with(|s| s.status != GameStatus::AwaitingInput)
            on:click=move |_| game.press(tile)
            aria-label=format!("{} tile", tile_name(tile))
        />
    }
}
