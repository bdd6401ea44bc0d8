// src/announcer.rs
//
// The page has a single polite live region. Every controller reaches it
// through the `Announcer` context instead of creating its own.

use crate::site_config::SiteConfig;
use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Text currently exposed in the live region. `seq` identifies the newest
/// announcement so a stale timer cannot overwrite it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveRegion {
    pub message: String,
    pub seq: u64,
}

pub enum LiveRegionAction {
    /// Empty the region so the next text is read even if it repeats.
    Begin {
        seq: u64,
    },
    Reveal {
        seq: u64,
        message: String,
    },
    Clear {
        seq: u64,
    },
}

impl Reducible for LiveRegion {
    type Action = LiveRegionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LiveRegionAction::Begin { seq } if seq > self.seq => Rc::new(LiveRegion {
                message: String::new(),
                seq,
            }),
            LiveRegionAction::Reveal { seq, message } if seq == self.seq => {
                Rc::new(LiveRegion { message, seq })
            }
            LiveRegionAction::Clear { seq } if seq == self.seq && !self.message.is_empty() => {
                Rc::new(LiveRegion {
                    message: String::new(),
                    seq,
                })
            }
            _ => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Announcer {
    announce: Callback<String>,
}

impl Announcer {
    pub fn announce(&self, message: impl Into<String>) {
        self.announce.emit(message.into());
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self {
            announce: Callback::from(|message: String| {
                log::debug!("No live region mounted, dropping announcement: {}", message);
            }),
        }
    }
}

#[hook]
pub fn use_announcer() -> Announcer {
    use_context::<Announcer>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct AnnouncerProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnnouncerProvider)]
pub fn announcer_provider(props: &AnnouncerProviderProps) -> Html {
    let region = use_reducer(LiveRegion::default);
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let next_seq = use_mut_ref(|| Cell::new(0u64));
    let timers = use_mut_ref(Vec::<Timeout>::new);

    let announcer = {
        let dispatcher = region.dispatcher();
        use_memo(config.timing.clone(), move |timing| {
            let timing = timing.clone();
            Announcer {
                announce: Callback::from(move |message: String| {
                    let seq = {
                        let counter = next_seq.borrow();
                        counter.set(counter.get() + 1);
                        counter.get()
                    };
                    dispatcher.dispatch(LiveRegionAction::Begin { seq });

                    let reveal = {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(timing.announce_delay_ms, move || {
                            dispatcher.dispatch(LiveRegionAction::Reveal { seq, message });
                        })
                    };
                    let clear = {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(timing.announce_clear_ms, move || {
                            dispatcher.dispatch(LiveRegionAction::Clear { seq });
                        })
                    };

                    // Dropping the previous timers cancels them.
                    let mut timers = timers.borrow_mut();
                    timers.clear();
                    timers.push(reveal);
                    timers.push(clear);
                }),
            }
        })
    };

    html! {
        <ContextProvider<Announcer> context={(*announcer).clone()}>
            { props.children.clone() }
            <div id="sr-announcer" class="sr-only" aria-live="polite" aria-atomic="true">
                { region.message.clone() }
            </div>
        </ContextProvider<Announcer>>
    }
}
