//! Upcoming-episode carousel: slides, dots, arrows, touch, auto-advance.
//!
//! DESIGN
//! ======
//! All navigation rules live in `state::carousel::CarouselState`; this
//! component wires DOM events into that controller and plays back its
//! `sync_seq` counter as smooth scrolls. The auto-advance timer is acquired
//! only while more than one slide exists and is released on cleanup, so a
//! carousel that leaves the tree never keeps a loop alive.

use std::time::Duration;

use feed::Episode;
use leptos::prelude::*;

use crate::state::carousel::{AUTO_ADVANCE_SECS, CarouselState};
use crate::state::episodes::EpisodesState;
use crate::util::interval::{IntervalHandle, spawn_interval};

#[cfg(feature = "csr")]
fn touch_point(ev: &leptos::ev::TouchEvent) -> Option<(f64, f64)> {
    let touch = ev.changed_touches().item(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn cancel_timer(timer: RwSignal<Option<IntervalHandle>>) {
    timer.update(|slot| {
        if let Some(handle) = slot.take() {
            handle.cancel();
        }
    });
}

/// Carousel of scheduled episodes. Renders nothing when no episode is
/// upcoming.
#[component]
pub fn UpcomingCarousel() -> impl IntoView {
    let episodes = expect_context::<RwSignal<EpisodesState>>();
    let carousel = RwSignal::new(CarouselState::default());
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let timer: RwSignal<Option<IntervalHandle>> = RwSignal::new(None);

    // Follow the data: the controller's item count mirrors the upcoming
    // list, and the timer exists exactly while auto-advance is possible.
    Effect::new(move || {
        let count = episodes.with(|state| state.upcoming_count());
        carousel.update(|c| c.set_item_count(count));

        if count > 1 {
            timer.update(|slot| {
                if slot.is_none() {
                    *slot = Some(spawn_interval(
                        Duration::from_secs(AUTO_ADVANCE_SECS),
                        move || {
                            #[cfg(feature = "csr")]
                            {
                                let visible = track_ref.get_untracked().is_some_and(|track| {
                                    crate::util::dom::is_vertically_visible(&track)
                                });
                                if visible {
                                    carousel.update(|c| {
                                        c.tick();
                                    });
                                }
                            }
                        },
                    ));
                }
            });
        } else {
            cancel_timer(timer);
        }
    });

    on_cleanup(move || cancel_timer(timer));

    // Play back navigation as a smooth scroll. Scroll reconciliation does
    // not bump the counter, so manual scrolling never fights the effect.
    let seen_seq = RwSignal::new(0u64);
    Effect::new(move || {
        let (seq, index) = carousel.with(|c| (c.sync_seq(), c.active_index()));
        if seq == seen_seq.get_untracked() {
            return;
        }
        seen_seq.set(seq);
        #[cfg(feature = "csr")]
        if let (Some(track), Some(index)) = (track_ref.get_untracked(), index) {
            crate::util::dom::scroll_child_into_view(&track, index);
        }
        #[cfg(not(feature = "csr"))]
        let _ = index;
    });

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        if let Some((x, y)) = touch_point(&ev) {
            carousel.update(|c| c.on_gesture_start(x, y));
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        match touch_point(&ev) {
            Some((x, y)) => carousel.update(|c| c.on_gesture_end(x, y)),
            None => carousel.update(CarouselState::on_gesture_cancel),
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_touch_cancel = move |_ev: leptos::ev::TouchEvent| {
        carousel.update(CarouselState::on_gesture_cancel);
    };

    let on_scroll = move |_| {
        #[cfg(feature = "csr")]
        if let Some(track) = track_ref.get_untracked() {
            if let Some(observed) = crate::util::dom::observed_slide_index(&track) {
                carousel.update(|c| c.on_visual_position_change(observed));
            }
        }
    };

    view! {
        <Show when=move || episodes.with(|state| state.upcoming_count() > 0)>
            <section class="upcoming" aria-label="Upcoming episodes">
                <h2 class="upcoming__heading">"Upcoming Episodes"</h2>
                <div class="upcoming__viewport">
                    <button
                        class="upcoming__arrow upcoming__arrow--prev"
                        aria-label="Previous episode"
                        on:click=move |_| carousel.update(CarouselState::retreat)
                    >
                        "‹"
                    </button>
                    <div
                        class="upcoming__track"
                        node_ref=track_ref
                        on:touchstart=on_touch_start
                        on:touchend=on_touch_end
                        on:touchcancel=on_touch_cancel
                        on:scroll=on_scroll
                    >
                        {move || {
                            episodes
                                .with(EpisodesState::upcoming)
                                .into_iter()
                                .map(|episode| view! { <UpcomingSlide episode/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <button
                        class="upcoming__arrow upcoming__arrow--next"
                        aria-label="Next episode"
                        on:click=move |_| carousel.update(CarouselState::advance)
                    >
                        "›"
                    </button>
                </div>
                <div class="upcoming__dots" role="tablist">
                    {move || {
                        let (count, active) = carousel.with(|c| (c.item_count(), c.active_index()));
                        (0..count)
                            .map(|index| {
                                let target = i64::try_from(index).unwrap_or(0);
                                view! {
                                    <button
                                        class="upcoming__dot"
                                        class:upcoming__dot--active=move || active == Some(index)
                                        aria-label=format!("Go to episode {}", index + 1)
                                        on:click=move |_| carousel.update(|c| c.go_to(target))
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </Show>
    }
}

/// One scheduled-episode slide.
#[component]
fn UpcomingSlide(episode: Episode) -> impl IntoView {
    view! {
        <div class="upcoming__slide">
            <img class="upcoming__thumb" src=episode.thumbnail loading="lazy" alt=episode.title.clone()/>
            <div class="upcoming__body">
                <span class="upcoming__badge">"Upcoming"</span>
                <span class="upcoming__number">{episode.number}</span>
                <h3 class="upcoming__title">{episode.title}</h3>
                <p class="upcoming__date">{episode.date}</p>
                <a class="upcoming__reminder" href=episode.youtube_url target="_blank" rel="noopener">
                    "Set a reminder"
                </a>
            </div>
        </div>
    }
}
