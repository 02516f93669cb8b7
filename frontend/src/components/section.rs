use yew::prelude::*;

use crate::animation::{Stagger, Variant};
use crate::reveal::{use_reveal, RevealOptions};

#[derive(Clone, Copy, PartialEq)]
struct RevealContext {
    revealed: bool,
    stagger: Stagger,
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: RevealOptions,
    #[prop_or_default]
    pub stagger: Stagger,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that reveals its `Reveal` children once it scrolls into
/// view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node, revealed) = use_reveal(props.options);
    let context = RevealContext {
        revealed,
        stagger: props.stagger,
    };

    html! {
        <section ref={node} class={props.class.clone()}>
            <ContextProvider<RevealContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position in the enclosing section's stagger order.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    // Outside a section there is nothing to wait for.
    let context = use_context::<RevealContext>().unwrap_or(RevealContext {
        revealed: true,
        stagger: Stagger::NONE,
    });
    let delay = context.stagger.delay_for(props.index);

    html! {
        <div
            class={props.class.clone()}
            style={props.variant.style(context.revealed, delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
