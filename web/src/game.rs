use crate::timer::CountdownView;
use crate::utils::*;
use clap::Args;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use wordchain_core::{self as game, DEFAULT_COUNTDOWN_SECS};
use yew::prelude::*;

/// Player action forwarded into the reveal engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Advance,
    Back,
    ToggleFullHint,
    RevealNextLetter,
}

#[derive(Debug)]
enum Board {
    Loading,
    Ready(game::RevealEngine),
    Failed(String),
}

impl Board {
    fn loaded(data: game::GameData, start_set: game::SetIndex) -> Self {
        let mut engine = game::RevealEngine::new(data);
        if let Err(err) = engine.load_set(start_set) {
            log::error!("{}, starting from the first set", err);
        }
        Self::Ready(engine)
    }

    fn apply(&mut self, action: Action) -> bool {
        use Action::*;

        let Self::Ready(engine) = self else {
            log::debug!("ignoring {:?}, word data not loaded", action);
            return false;
        };

        match action {
            Advance => {
                let outcome = engine.advance();
                if let game::AdvanceOutcome::NextSet(index) = outcome {
                    log::debug!("moved to set {}", index);
                }
                outcome.has_update()
            }
            Back => engine.back().has_update(),
            ToggleFullHint => engine.toggle_full_hint().has_update(),
            RevealNextLetter => engine.reveal_next_letter().has_update(),
        }
    }

    fn render_model(&self) -> Option<game::RenderModel> {
        match self {
            Self::Ready(engine) => Some(engine.render()),
            _ => None,
        }
    }
}

pub(crate) enum Msg {
    Loaded(Result<game::GameData, LoadError>),
    Play(Action),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Where to fetch the word sets from
    #[arg(long, default_value = "game.json")]
    data: String,

    /// Set to start the game with
    #[arg(long = "set", default_value_t = 0)]
    start_set: game::SetIndex,

    /// Countdown length in seconds
    #[arg(long, default_value_t = DEFAULT_COUNTDOWN_SECS)]
    time: u32,
}

#[derive(Debug)]
pub(crate) struct GameView {
    board: Board,
    _keydown: EventListener,
}

impl GameView {
    fn load(ctx: &Context<Self>) {
        let url = ctx.props().data.clone();
        ctx.link().send_future(async move {
            Msg::Loaded(fetch_game_data(&url).await)
        });
    }

    fn listen_for_space(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&document(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if event.code() == "Space" {
                event.prevent_default();
                log::trace!("space pressed");
                link.send_message(Msg::Play(Action::Advance));
            }
        })
    }

    fn view_words(&self, ctx: &Context<Self>, model: &game::RenderModel) -> Html {
        use Action::*;

        let link = ctx.link();
        let play = |action: Action| link.callback(move |_: MouseEvent| Msg::Play(action));

        html! {
            <>
                <h1 id="top-text">{model.title()}</h1>
                <small class="progress">
                    {format!("Set {} of {}", model.set_index + 1, model.set_count)}
                </small>
                <ol id="word-list">
                    {
                        for model.slots.iter().map(|slot| html! {
                            <li class={classes!(slot.is_fixed().then_some("revealed"))}>
                                {slot.to_string()}
                            </li>
                        })
                    }
                </ol>
                <nav>
                    <button id="back-button" onclick={play(Back)}>{"Back"}</button>
                    <button id="show-letters-button" onclick={play(ToggleFullHint)}>{"Show Letters"}</button>
                    <button id="show-next-letter" onclick={play(RevealNextLetter)}>{"Next Letter"}</button>
                    <button id="next-button" onclick={play(Advance)}>{model.advance_label.text()}</button>
                </nav>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx);
        Self {
            board: Board::Loading,
            _keydown: Self::listen_for_space(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(data)) => {
                self.board = Board::loaded(data, ctx.props().start_set);
                true
            }
            Msg::Loaded(Err(err)) => {
                log::error!("{}", err);
                self.board = Board::Failed(err.to_string());
                true
            }
            Msg::Play(action) => {
                log::trace!("action: {:?}", action);
                self.board.apply(action)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let words = match (&self.board, self.board.render_model()) {
            (_, Some(model)) => self.view_words(ctx, &model),
            (Board::Failed(message), _) => html! { <p class="error">{message.clone()}</p> },
            _ => html! { <p class="loading">{"Loading…"}</p> },
        };

        html! {
            <div class="wordchain">
                {words}
                <CountdownView initial={ctx.props().time}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(sets: &[&[&str]]) -> game::GameData {
        let sets = sets
            .iter()
            .map(|set| set.iter().map(|w| w.to_string()).collect())
            .collect();
        game::GameData::new(sets).unwrap()
    }

    fn texts(board: &Board) -> Vec<String> {
        board
            .render_model()
            .map(|model| model.slots.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn actions_before_load_are_ignored() {
        let mut board = Board::Loading;

        assert!(!board.apply(Action::Advance));
        assert!(!board.apply(Action::RevealNextLetter));
        assert!(board.render_model().is_none());
    }

    #[test]
    fn invalid_start_set_falls_back_to_first_set() {
        let board = Board::loaded(data(&[&["A", "B"], &["C", "D"]]), 7);

        assert_eq!(texts(&board), ["A", "B _ _ _ _"]);
    }

    #[test]
    fn actions_drive_the_engine() {
        let mut board = Board::loaded(data(&[&["SUN", "FLOWER"], &["RAIN", "BOW"]]), 0);

        assert!(board.apply(Action::RevealNextLetter));
        assert_eq!(texts(&board), ["SUN", "F L _ _ _ _"]);

        assert!(board.apply(Action::Advance));
        assert!(!board.apply(Action::ToggleFullHint));
        let model = board.render_model().unwrap();
        assert_eq!(model.advance_label.text(), "Next Set");

        assert!(board.apply(Action::Advance));
        assert_eq!(texts(&board), ["RAIN", "B _ _ _ _"]);
        assert!(!board.apply(Action::Back));
    }
}
