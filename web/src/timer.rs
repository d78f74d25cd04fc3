use gloo::timers::callback::Interval;
use wordchain_core::{Countdown, TICK_MILLIS, TickOutcome};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum TimerMsg {
    Start,
    Pause,
    Reset,
    Tick,
}

/// Which timer controls accept a click.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Controls {
    start: bool,
    pause: bool,
}

impl Controls {
    fn of(countdown: &Countdown) -> Self {
        Self {
            start: !countdown.is_running() && !countdown.is_expired(),
            pause: countdown.is_running(),
        }
    }
}

/// Applies `msg` and reports whether the tick interval must be running afterwards.
fn apply(countdown: &mut Countdown, msg: TimerMsg) -> (bool, bool) {
    use TimerMsg::*;

    let updated = match msg {
        Start if countdown.remaining() == 0 && !countdown.is_running() => countdown.expire(),
        Start => {
            // first tick is immediate so the clock moves as soon as it is started
            countdown.start() && {
                countdown.tick();
                true
            }
        }
        Pause => countdown.pause(),
        Reset => {
            countdown.reset();
            true
        }
        Tick => {
            let outcome = countdown.tick();
            if outcome == TickOutcome::Expired {
                log::info!("time's up");
            }
            outcome.has_update()
        }
    };

    (updated, countdown.is_running())
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CountdownProps {
    pub initial: u32,
}

#[derive(Debug)]
pub(crate) struct CountdownView {
    countdown: Countdown,
    interval: Option<Interval>,
}

impl Component for CountdownView {
    type Message = TimerMsg;
    type Properties = CountdownProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            countdown: Countdown::new(ctx.props().initial),
            interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        log::trace!("timer: {:?}", msg);
        let (updated, running) = apply(&mut self.countdown, msg);

        match (running, self.interval.is_some()) {
            (true, false) => {
                let link = ctx.link().clone();
                self.interval = Some(Interval::new(TICK_MILLIS, move || {
                    link.send_message(TimerMsg::Tick)
                }));
            }
            (false, true) => {
                // dropping the interval cancels it
                self.interval = None;
            }
            _ => {}
        }

        updated
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.countdown = Countdown::new(ctx.props().initial);
        self.interval = None;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use TimerMsg::*;

        let display = self.countdown.display();
        let controls = Controls::of(&self.countdown);
        let link = ctx.link();

        html! {
            <section class="timer">
                <output id="timer" class={classes!(display.is_expired().then_some("expired"))}>
                    {display.to_string()}
                </output>
                <button id="start-timer-button" disabled={!controls.start} onclick={link.callback(|_| Start)}>
                    {"Start"}
                </button>
                <button id="pause-timer-button" disabled={!controls.pause} onclick={link.callback(|_| Pause)}>
                    {"Pause"}
                </button>
                <button id="reset-timer-button" onclick={link.callback(|_| Reset)}>
                    {"Reset"}
                </button>
            </section>
        }
    }
}
