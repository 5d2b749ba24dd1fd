use crate::{
    ComponentProps, ComponentRef, NotificationDuration, NotificationOptions, NotificationPosition,
};

/// A patch for an existing notification.
///
/// Each field is `None` when left alone, `Some(Some(_))` to set a value and
/// `Some(None)` to clear it. Converting from [`NotificationOptions`] sets every
/// field those options specify and leaves the rest alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationUpdate {
    pub color: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub duration: Option<Option<NotificationDuration>>,
    pub position: Option<Option<NotificationPosition>>,
    pub loading: Option<Option<bool>>,
    pub flat: Option<Option<bool>>,
    pub square: Option<Option<bool>>,
    pub not_padding: Option<Option<bool>>,
    pub button_close: Option<Option<bool>>,
    pub width: Option<Option<String>>,
    pub component: Option<Option<ComponentRef>>,
    pub component_props: Option<Option<ComponentProps>>,
}

macro_rules! update_fields {
    ( $( $field:ident / $clear:ident: $ty:ty ),+ $(,)? ) => {
        impl NotificationUpdate {
            $(
                pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
                    self.$field = Some(Some($field.into()));
                    self
                }

                pub fn $clear(mut self) -> Self {
                    self.$field = Some(None);
                    self
                }
            )+

            /// Writes every touched field into `options`.
            pub fn apply_to(self, options: &mut NotificationOptions) {
                $(
                    if let Some(value) = self.$field {
                        options.$field = value;
                    }
                )+
            }
        }

        impl From<NotificationOptions> for NotificationUpdate {
            fn from(options: NotificationOptions) -> Self {
                Self {
                    $( $field: options.$field.map(Some), )+
                }
            }
        }
    };
}

update_fields!(
    color / clear_color: String,
    title / clear_title: String,
    content / clear_content: String,
    icon / clear_icon: String,
    duration / clear_duration: NotificationDuration,
    position / clear_position: NotificationPosition,
    loading / clear_loading: bool,
    flat / clear_flat: bool,
    square / clear_square: bool,
    not_padding / clear_not_padding: bool,
    button_close / clear_button_close: bool,
    width / clear_width: String,
    component / clear_component: ComponentRef,
    component_props / clear_component_props: ComponentProps,
);

impl NotificationUpdate {
    pub fn new() -> Self {
        Self::default()
    }
}
