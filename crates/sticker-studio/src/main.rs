use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sticker_engine::controllers::{MemeSticker, MemeStickerBindings, TouchResponse};
use sticker_engine::coords::{InstantiationArea, Vec2};
use sticker_engine::hierarchy::HierarchyPrinter;
use sticker_engine::hints::{HINT_ROTATE, HINT_TAP, HintItem, HintManager, VisibilityHint};
use sticker_engine::host::{CameraInfo, Hierarchy, LayerHost, ScreenHost};
use sticker_engine::input::TouchEvent;
use sticker_engine::layer::RenderOrder;
use sticker_engine::logging::{LoggingConfig, init_logging};
use sticker_engine::scene::{NodeId, NodeTemplate, SceneGraph, Visual};
use sticker_engine::config::MemeStickerConfig;
use sticker_engine::traverse::skip_underscore_prefixed;

struct Stage {
    scene: SceneGraph,
    bindings: MemeStickerBindings<SceneGraph>,
    hints: HintManager<SceneGraph>,
}

fn build_stage() -> Result<Stage> {
    let mut scene = SceneGraph::new();

    scene.spawn(
        &NodeTemplate::new("Camera")
            .camera(CameraInfo::new(0, [0]))
            .child(NodeTemplate::new("_Gizmo")),
        None,
    );
    scene.spawn(
        &NodeTemplate::new("Background")
            .visual(Visual::new(RenderOrder::new(-100)))
            .render_layer(0),
        None,
    );

    let ortho = scene.spawn(&NodeTemplate::new("Orthographic Camera").camera(CameraInfo::new(1, [1])), None);
    let stickers_parent = scene.create_node("Stickers", Some(ortho));
    let buttons_parent = scene.create_node("Buttons", Some(ortho));
    let delete_target = scene.spawn(
        &NodeTemplate::new("Delete Target")
            .anchor(Vec2::new(0.0, -0.85))
            .child(NodeTemplate::new("Delete UI").anchor(Vec2::new(0.0, -0.85))),
        Some(ortho),
    );
    let delete_ui = scene
        .child(delete_target, 0)
        .context("delete target lost its UI child")?;

    let tap = scene.spawn(&NodeTemplate::new("Tap Hint").anchor(Vec2::new(0.0, -0.6)), Some(ortho));
    let rotate = scene.spawn(&NodeTemplate::new("Rotate Hint").anchor(Vec2::zero()).disabled(), Some(ortho));
    let hints = HintManager::new([
        HintItem::new(HINT_TAP, tap, VisibilityHint),
        HintItem::new(HINT_ROTATE, rotate, VisibilityHint).show_once(true),
    ]);

    let bindings = MemeStickerBindings {
        stickers_parent,
        sticker_prefab: NodeTemplate::new("Sticker")
            .visual(Visual::new(RenderOrder::new(10)))
            .render_layer(1)
            .anchor(Vec2::zero()),
        buttons_parent,
        button_prefab: NodeTemplate::new("Button")
            .visual(Visual::new(RenderOrder::new(200)))
            .render_layer(1),
        delete_target,
        delete_ui,
    };

    Ok(Stage { scene, bindings, hints })
}

fn log_stack(step: &str, session: &MemeSticker<SceneGraph>, scene: &SceneGraph) {
    let stack = session.stack().borrow();
    let rows: Vec<String> = stack
        .snapshot(scene)
        .iter()
        .map(|e| format!("{}:{}", scene.name(scene.owner(e.layer)), e.render_order))
        .collect();
    info!("{step:<28} [{}]", rows.join(", "));
}

fn press(session: &mut MemeSticker<SceneGraph>, scene: &mut SceneGraph, button: NodeId) -> Result<NodeId> {
    let TouchResponse::Instantiated(sticker) = session.handle_touch(scene, TouchEvent::start(button)) else {
        anyhow::bail!("button {button:?} did not instantiate a sticker");
    };
    session.handle_touch(scene, TouchEvent::end(button));
    Ok(sticker)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Stage { mut scene, bindings, hints } = build_stage()?;

    let config = MemeStickerConfig::new()
        .textures(["doge", "grumpy-cat", "stonks"])
        .instantiation_area(InstantiationArea::new(-0.6, 0.6, -0.3, 0.6));

    let mut session = MemeSticker::new(&mut scene, config, bindings, hints, StdRng::seed_from_u64(2024))
        .context("failed to set up the sticker session")?;
    log_stack("startup", &session, &scene);

    let buttons = session.buttons();
    anyhow::ensure!(buttons.len() == 3, "expected three buttons, got {}", buttons.len());

    let grumpy = press(&mut session, &mut scene, buttons[1])?;
    log_stack("press grumpy-cat", &session, &scene);
    let stonks = press(&mut session, &mut scene, buttons[2])?;
    log_stack("press stonks", &session, &scene);

    let first = scene
        .child(session.stickers_parent(), 0)
        .context("startup sticker is missing")?;
    session.handle_touch(&mut scene, TouchEvent::start(first));
    session.handle_touch(&mut scene, TouchEvent::end(first));
    log_stack("touch first sticker", &session, &scene);

    {
        let mut stack = session.stack().borrow_mut();
        if let Some(visual) = scene.layers_on(stonks).first().copied() {
            stack.send_to_back(&mut scene, visual);
        }
    }
    log_stack("send stonks to back", &session, &scene);

    session.handle_touch(&mut scene, TouchEvent::start(grumpy));
    scene.set_anchor_center(grumpy, Vec2::new(0.03, -0.82));
    session.handle_touch(&mut scene, TouchEvent::moved(grumpy));
    match session.handle_touch(&mut scene, TouchEvent::end(grumpy)) {
        TouchResponse::Deleted(node) => info!("dropped {node:?} on the delete target"),
        other => info!("grumpy-cat survived the drag: {other:?}"),
    }
    log_stack("drag grumpy-cat to delete", &session, &scene);

    let tree = HierarchyPrinter::new().print(&scene, skip_underscore_prefixed);
    println!("{tree}");

    Ok(())
}
