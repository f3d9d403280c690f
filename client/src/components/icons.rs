//! Inline SVG icons shared across feed components.
//!
//! DESIGN
//! ======
//! Icons are 20x20 stroke outlines inheriting `currentColor`, so CSS can
//! recolor them per context. Kept as plain functions so components compose
//! them inside `view!` without prop plumbing.

use leptos::prelude::*;

pub fn zap() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M11 2 L4 11 H9 L8 18 L16 8 H10 Z" />
        </svg>
    }
}

pub fn search() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="9" cy="9" r="5.5" />
            <line x1="13.2" y1="13.2" x2="17.5" y2="17.5" />
        </svg>
    }
}

pub fn bell() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 3 C7.2 3 5.5 5.2 5.5 8 V11 L4 13.5 H16 L14.5 11 V8 C14.5 5.2 12.8 3 10 3 Z" />
            <path d="M8.5 16 C8.8 17 9.3 17.5 10 17.5 C10.7 17.5 11.2 17 11.5 16" />
        </svg>
    }
}

pub fn plus() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <line x1="10" y1="4" x2="10" y2="16" />
            <line x1="4" y1="10" x2="16" y2="10" />
        </svg>
    }
}

pub fn user() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="6.5" r="3.5" />
            <path d="M3.5 17 C3.5 13.5 6.5 11.5 10 11.5 C13.5 11.5 16.5 13.5 16.5 17" />
        </svg>
    }
}

pub fn close() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <line x1="5" y1="5" x2="15" y2="15" />
            <line x1="15" y1="5" x2="5" y2="15" />
        </svg>
    }
}

pub fn heart() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 17 C10 17 3 12.5 3 7.8 C3 5.3 5 3.5 7.2 3.5 C8.4 3.5 9.4 4.1 10 5 C10.6 4.1 11.6 3.5 12.8 3.5 C15 3.5 17 5.3 17 7.8 C17 12.5 10 17 10 17 Z" />
        </svg>
    }
}

pub fn comment() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M17 9.5 C17 13 13.9 15.5 10 15.5 C8.9 15.5 7.9 15.3 7 15 L3 16 L4.2 12.9 C3.4 11.9 3 10.8 3 9.5 C3 6 6.1 3.5 10 3.5 C13.9 3.5 17 6 17 9.5 Z" />
        </svg>
    }
}

pub fn bookmark() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M5.5 3 H14.5 V17 L10 13.5 L5.5 17 Z" />
        </svg>
    }
}

pub fn share() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="5" cy="10" r="2.2" />
            <circle cx="14.5" cy="4.5" r="2.2" />
            <circle cx="14.5" cy="15.5" r="2.2" />
            <line x1="7" y1="9" x2="12.5" y2="5.5" />
            <line x1="7" y1="11" x2="12.5" y2="14.5" />
        </svg>
    }
}

pub fn external_link() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M8 5 H4.5 V15.5 H15 V12" />
            <path d="M11.5 4 H16 V8.5" />
            <line x1="16" y1="4" x2="9.5" y2="10.5" />
        </svg>
    }
}

pub fn git_branch() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="6" cy="5" r="2" />
            <circle cx="6" cy="15" r="2" />
            <circle cx="14" cy="7" r="2" />
            <line x1="6" y1="7" x2="6" y2="13" />
            <path d="M14 9 C14 12 10 11.5 7.5 13.2" />
        </svg>
    }
}

pub fn bot() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <rect x="4" y="7" width="12" height="9" rx="2" />
            <line x1="10" y1="4.5" x2="10" y2="7" />
            <circle cx="10" cy="3.5" r="1" />
            <circle cx="7.5" cy="11" r="1" />
            <circle cx="12.5" cy="11" r="1" />
            <line x1="8" y1="13.8" x2="12" y2="13.8" />
        </svg>
    }
}

pub fn sparkles() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 3 L11.2 7.8 L16 9 L11.2 10.2 L10 15 L8.8 10.2 L4 9 L8.8 7.8 Z" />
            <path d="M15.5 13.5 L16 15.5 L18 16 L16 16.5 L15.5 18.5 L15 16.5 L13 16 L15 15.5 Z" />
        </svg>
    }
}

pub fn trending_up() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="3,14 8,9 11,12 17,6" />
            <polyline points="13,6 17,6 17,10" />
        </svg>
    }
}

pub fn flame() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 2.5 C10.5 5 12 6.5 13.3 8.2 C14.2 9.4 14.7 10.6 14.7 11.8 C14.7 14.7 12.6 16.8 10 16.8 C7.4 16.8 5.3 14.7 5.3 11.8 C5.3 9.8 6.3 8.3 7.4 6.9 C7.7 8 8.3 8.8 9.1 9.2 C9 6.8 9.4 4.6 10 2.5 Z" />
        </svg>
    }
}

pub fn compass() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="10" r="7.5" />
            <polygon points="13,7 11,11 7,13 9,9" />
        </svg>
    }
}

pub fn check() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="4,10.5 8.5,15 16,5.5" />
        </svg>
    }
}

pub fn chevron_up() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="5,12.5 10,7.5 15,12.5" />
        </svg>
    }
}

pub fn chevron_down() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="5,7.5 10,12.5 15,7.5" />
        </svg>
    }
}

pub fn chevron_right() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="7.5,5 12.5,10 7.5,15" />
        </svg>
    }
}

pub fn send() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M17 3 L3 9 L9 11 L11 17 Z" />
            <line x1="9" y1="11" x2="17" y2="3" />
        </svg>
    }
}

pub fn maximize() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M12 4 H16 V8" />
            <path d="M8 16 H4 V12" />
            <line x1="16" y1="4" x2="11.5" y2="8.5" />
            <line x1="4" y1="16" x2="8.5" y2="11.5" />
        </svg>
    }
}

pub fn github() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 2.5 C5.9 2.5 2.5 5.9 2.5 10 C2.5 13.3 4.6 16.1 7.6 17.1 V15.4 C5.9 15.8 5.5 14.4 5.5 14.4 C5.2 13.5 4.7 13.3 4.7 13.3 C4 12.8 4.8 12.8 4.8 12.8 C5.6 12.9 6 13.6 6 13.6 C6.7 14.8 7.8 14.4 8.2 14.2 C8.2 13.7 8.4 13.4 8.6 13.2 C6.9 13 5.2 12.4 5.2 9.5 C5.2 8.7 5.5 8 6 7.5 C5.9 7.3 5.6 6.5 6.1 5.5 C6.1 5.5 6.7 5.3 8.1 6.3 C8.7 6.1 9.3 6 10 6 C10.7 6 11.3 6.1 11.9 6.3 C13.3 5.3 13.9 5.5 13.9 5.5 C14.4 6.5 14.1 7.3 14 7.5 C14.5 8 14.8 8.7 14.8 9.5 C14.8 12.4 13.1 13 11.4 13.2 C11.7 13.4 11.9 13.9 11.9 14.6 V17.1 C14.9 16.1 17.5 13.3 17.5 10 C17.5 5.9 14.1 2.5 10 2.5 Z" />
        </svg>
    }
}

pub fn globe() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="10" r="7.5" />
            <ellipse cx="10" cy="10" rx="3.2" ry="7.5" />
            <line x1="2.5" y1="10" x2="17.5" y2="10" />
        </svg>
    }
}

pub fn wand() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <line x1="3" y1="17" x2="12" y2="8" />
            <path d="M14 3 L14.6 5 L16.6 5.6 L14.6 6.2 L14 8.2 L13.4 6.2 L11.4 5.6 L13.4 5 Z" />
            <line x1="16.2" y1="9.8" x2="17.2" y2="10.8" />
            <line x1="9.2" y1="2.8" x2="10.2" y2="3.8" />
        </svg>
    }
}

pub fn palette() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 2.5 C5.9 2.5 2.5 5.9 2.5 10 C2.5 14.1 5.9 17.5 10 17.5 C11.1 17.5 12 16.6 12 15.5 C12 14.9 11.8 14.5 11.4 14.1 C11 13.7 10.8 13.3 10.8 12.8 C10.8 11.7 11.7 10.8 12.8 10.8 H14.5 C16.2 10.8 17.5 9.5 17.5 7.8 C17.5 4.8 14.1 2.5 10 2.5 Z" />
            <circle cx="6.5" cy="8" r="1" />
            <circle cx="10" cy="6" r="1" />
            <circle cx="13.5" cy="8" r="1" />
        </svg>
    }
}

pub fn loader() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 2.5 A7.5 7.5 0 0 1 17.5 10" />
        </svg>
    }
}

pub fn moon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M17 11 C16 11.4 15 11.6 13.9 11.6 C9.9 11.6 6.7 8.4 6.7 4.4 C6.7 3.9 6.8 3.4 6.9 3 C4.3 4.1 2.5 6.7 2.5 9.7 C2.5 13.7 5.8 17 9.8 17 C13 17 15.9 14.5 17 11 Z" />
        </svg>
    }
}

pub fn sun() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="10" r="3.8" />
            <line x1="10" y1="2" x2="10" y2="4" />
            <line x1="10" y1="16" x2="10" y2="18" />
            <line x1="2" y1="10" x2="4" y2="10" />
            <line x1="16" y1="10" x2="18" y2="10" />
            <line x1="4.3" y1="4.3" x2="5.8" y2="5.8" />
            <line x1="14.2" y1="14.2" x2="15.7" y2="15.7" />
            <line x1="4.3" y1="15.7" x2="5.8" y2="14.2" />
            <line x1="14.2" y1="5.8" x2="15.7" y2="4.3" />
        </svg>
    }
}

pub fn code() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="7,6 3,10 7,14" />
            <polyline points="13,6 17,10 13,14" />
        </svg>
    }
}

pub fn eye() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M2.5 10 C4.5 6 7 4.2 10 4.2 C13 4.2 15.5 6 17.5 10 C15.5 14 13 15.8 10 15.8 C7 15.8 4.5 14 2.5 10 Z" />
            <circle cx="10" cy="10" r="2.5" />
        </svg>
    }
}

pub fn linkedin() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <rect x="3" y="3" width="14" height="14" rx="2" />
            <line x1="6.5" y1="8.5" x2="6.5" y2="13.5" />
            <circle cx="6.5" cy="5.9" r="0.6" />
            <path d="M9.5 13.5 V8.5 M9.5 10.5 C9.5 9.4 10.3 8.5 11.5 8.5 C12.7 8.5 13.5 9.4 13.5 10.5 V13.5" />
        </svg>
    }
}

pub fn mail() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <rect x="2.5" y="4.5" width="15" height="11" rx="1.5" />
            <polyline points="3,5.5 10,11 17,5.5" />
        </svg>
    }
}

pub fn arrow_right() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <line x1="3.5" y1="10" x2="16" y2="10" />
            <polyline points="11,5 16,10 11,15" />
        </svg>
    }
}
