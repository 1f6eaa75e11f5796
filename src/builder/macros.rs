//! Macros for ergonomic token construction.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use retrace::state_enum;
/// use retrace::core::State;
///
/// state_enum! {
///     pub enum PlayerState {
///         Stopped,
///         Playing,
///         Paused,
///     }
/// }
///
/// assert_eq!(PlayerState::Paused.name(), "Paused");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__token_enum! {
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use retrace::event_enum;
/// use retrace::core::Event;
///
/// event_enum! {
///     pub enum PlayerEvent {
///         Play,
///         Pause,
///         Stop,
///     }
/// }
///
/// assert_eq!(PlayerEvent::Play.name(), "Play");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__token_enum! {
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __token_enum {
    (
        $token:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $token for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::ConfigBuilder;
    use crate::core::{Event, State};
    use crate::machine::StateMachine;

    state_enum! {
        enum TestState {
            Normal,
            Active,
            Paused,
        }
    }

    event_enum! {
        enum TestEvent {
            Go,
            Pause,
            Resume,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Normal.name(), "Normal");
        assert_eq!(TestState::Active.name(), "Active");
        assert_eq!(TestState::Paused.name(), "Paused");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Go.name(), "Go");
        assert_eq!(TestEvent::Resume.name(), "Resume");
    }

    #[test]
    fn state_enum_supports_visibility() {
        // The macro should work with pub visibility
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn generated_tokens_drive_a_machine() {
        let config = ConfigBuilder::new()
            .initial(TestState::Normal)
            .transition(TestState::Normal, TestEvent::Go, TestState::Active)
            .transition(TestState::Active, TestEvent::Pause, TestState::Paused)
            .transition(TestState::Paused, TestEvent::Resume, TestState::Active)
            .build()
            .unwrap();
        let mut machine = StateMachine::new(config).unwrap();

        machine.trigger(&TestEvent::Go).unwrap();
        machine.trigger(&TestEvent::Pause).unwrap();
        assert_eq!(machine.get_state(), &TestState::Paused);
        assert!(machine.undo());
        assert_eq!(machine.get_state(), &TestState::Active);
    }

    #[test]
    fn generated_tokens_load_from_json() {
        let config: crate::config::Config<TestState, TestEvent> = crate::config::Config::from_json(
            r#"{
                "initial": "Normal",
                "states": {
                    "Normal": { "transitions": { "Go": "Active" } },
                    "Active": {}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.transition(&TestState::Normal, &TestEvent::Go),
            Some(&TestState::Active)
        );
    }
}
