use scenic_cmd::Interpreter;
use scenic_scene::{EntityKind, GeometryKind};

fn ok(interp: &mut Interpreter, line: &str) -> String {
    let out = interp.execute(line);
    assert!(out.ok, "command '{line}' failed: {}", out.message);
    out.message
}

fn err(interp: &mut Interpreter, line: &str) -> String {
    let out = interp.execute(line);
    assert!(!out.ok, "command '{line}' unexpectedly succeeded: {}", out.message);
    out.message
}

#[test]
fn every_shape_creates_a_default_entity_with_monotonic_ids() {
    let mut cli = Interpreter::headless();

    for (i, kind) in GeometryKind::ALL.iter().enumerate() {
        let msg = ok(&mut cli, kind.name());
        let expected_id = format!("{}{}", kind.name(), i);
        assert_eq!(msg, format!("Created {} '{}'", kind.name(), expected_id));

        let entity = cli.registry().get(&expected_id).unwrap();
        assert_eq!(entity.kind, EntityKind::Object);
        assert!(entity.visible);
        assert_eq!(entity.material.preset.as_deref(), Some("w"));
        let p = &entity.transform.position;
        assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
    }

    let (objects, _, _) = cli.registry().counts();
    assert_eq!(objects, 12);
}

#[test]
fn aliases_expand_only_the_command_token() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 0 0 r box1");
    let entity = cli.registry().get("box1").unwrap();
    assert_eq!(entity.geometry.as_ref().unwrap().kind, GeometryKind::Cube);

    // "r" as an id argument must not expand to "ring"
    ok(&mut cli, "mv box1 1 0 0");
    assert!(cli.registry().get("ring0").is_none());
}

#[test]
fn move_then_info_reports_two_decimal_position() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube");
    ok(&mut cli, "move cube0 1 2 3");

    let info = ok(&mut cli, "info cube0");
    assert!(info.contains("position: (1.00, 2.00, 3.00)"), "{info}");
}

#[test]
fn deleted_entity_is_gone_without_panicking() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "sphere 1 32 16 0 0 0 g ball");
    ok(&mut cli, "delete ball");

    let msg = err(&mut cli, "info ball");
    assert_eq!(msg, "Object 'ball' not found");
}

#[test]
fn unknown_command_and_empty_input() {
    let mut cli = Interpreter::headless();
    assert_eq!(err(&mut cli, "frobnicate"), "Unknown command: frobnicate");

    let out = cli.execute("");
    assert!(!out.ok);
    assert_eq!(out.message, "Invalid command");

    // whitespace-only is a silent empty success
    let out = cli.execute("   ");
    assert!(out.ok);
    assert_eq!(out.message, "");
}

#[test]
fn animation_runs_on_ticks_and_snaps_at_the_end() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube 1 1 1 0 0 0 w box1");
    ok(&mut cli, "animate box1 position.y 0 5 2");
    assert_eq!(cli.active_animations(), 1);

    // arming tick: value stays at the start
    cli.tick(0.0);
    let y = cli.registry().get("box1").unwrap().transform.position.y;
    assert!(y.abs() < 1e-4);

    cli.tick(1000.0);
    let y = cli.registry().get("box1").unwrap().transform.position.y;
    assert!((y - 2.5).abs() < 1e-4);

    cli.tick(2500.0);
    let y = cli.registry().get("box1").unwrap().transform.position.y;
    assert!((y - 5.0).abs() < 1e-4);
    assert_eq!(cli.active_animations(), 0);
}

#[test]
fn stop_animation_removes_by_target() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube");
    ok(&mut cli, "an cube0 position.x 0 1 10");
    ok(&mut cli, "an cube0 position.y 0 1 10");

    let msg = ok(&mut cli, "stopAnimation cube0 position.x");
    assert_eq!(msg, "Stopped 1 animation(s) for 'cube0'");
    assert_eq!(cli.active_animations(), 1);

    ok(&mut cli, "stopAnimation cube0");
    assert_eq!(cli.active_animations(), 0);
}

#[test]
fn pause_and_undo_are_not_implemented() {
    let mut cli = Interpreter::headless();
    assert_eq!(err(&mut cli, "pauseAnimation x"), "Animation pause not implemented yet");
    assert_eq!(err(&mut cli, "undo"), "Undo not implemented yet");
    assert_eq!(err(&mut cli, "redo"), "Redo not implemented yet");
}

#[test]
fn batch_skips_comments_and_counts_executed_lines() {
    let mut cli = Interpreter::headless();
    let out = cli.execute("c 1 1 1\n# a comment\ns 1\n// another comment\n\nmv cube0 1 0 0");
    assert!(out.ok);
    assert!(out.message.starts_with("Executed 3 commands:"), "{}", out.message);
    assert_eq!(out.message.lines().count(), 4);

    let (objects, _, _) = cli.registry().counts();
    assert_eq!(objects, 2);
}

#[test]
fn batch_isolates_failing_lines() {
    let mut cli = Interpreter::headless();
    let out = cli.execute("mv nope 1 0 0\nc 1 1 1");
    assert!(out.ok);
    assert!(out.message.contains("mv nope 1 0 0: Object 'nope' not found"));
    assert!(cli.registry().get("cube0").is_some());
}

#[test]
fn group_and_ungroup_round_trip() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 1 0 0 w a");
    ok(&mut cli, "c 1 1 1 -1 0 0 w b");

    let msg = ok(&mut cli, "group a b squad");
    assert_eq!(msg, "Created group 'squad' with 2 objects");
    let (_, _, groups) = cli.registry().counts();
    assert_eq!(groups, 1);

    // offset the group, then ungroup: children absorb the offset
    ok(&mut cli, "move squad 0 3 0");
    let msg = ok(&mut cli, "ungroup squad");
    assert_eq!(msg, "Ungrouped 'squad', moved 2 objects to scene");

    let (_, _, groups) = cli.registry().counts();
    assert_eq!(groups, 0);
    let a = cli.registry().get("a").unwrap();
    assert_eq!((a.transform.position.x, a.transform.position.y), (1.0, 3.0));
}

#[test]
fn grouping_needs_valid_members() {
    let mut cli = Interpreter::headless();
    assert_eq!(err(&mut cli, "group lonely"), "No objects specified for grouping");
    assert_eq!(err(&mut cli, "group ghost squad"), "No valid objects found to group");
    assert_eq!(err(&mut cli, "ungroup squad"), "Group 'squad' not found");
}

#[test]
fn parent_and_unparent_mirror_grouping() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 2 0 0 w kid");
    ok(&mut cli, "c");
    ok(&mut cli, "group cube1 squad");
    ok(&mut cli, "move squad 0 5 0");

    ok(&mut cli, "parent kid squad");
    assert_eq!(
        cli.registry().get_group("squad").unwrap().children,
        vec!["cube1".to_string(), "kid".to_string()]
    );

    ok(&mut cli, "unparent kid");
    let kid = cli.registry().get("kid").unwrap();
    assert_eq!((kid.transform.position.x, kid.transform.position.y), (2.0, 5.0));
    assert_eq!(cli.registry().get_group("squad").unwrap().children.len(), 1);
}

#[test]
fn reparenting_leaves_exactly_one_owning_group() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 0 0 w a");
    ok(&mut cli, "c 1 1 1 0 0 0 w b");
    ok(&mut cli, "group a g1");
    ok(&mut cli, "group b g2");
    ok(&mut cli, "move g1 100 0 0");

    // moving 'a' into g2 must drop it from g1's member list
    ok(&mut cli, "parent a g2");
    assert!(cli.registry().get_group("g1").unwrap().children.is_empty());
    assert_eq!(cli.registry().group_containing("a"), Some("g2"));

    // dissolving the old group no longer touches the moved child
    let msg = ok(&mut cli, "ungroup g1");
    assert_eq!(msg, "Ungrouped 'g1', moved 0 objects to scene");
    let a = cli.registry().get("a").unwrap();
    assert_eq!(a.transform.position.x, 0.0);
    assert_eq!(cli.registry().group_containing("a"), Some("g2"));

    // regrouping steals membership the same way
    ok(&mut cli, "group a g3");
    assert_eq!(cli.registry().group_containing("a"), Some("g3"));
    assert_eq!(
        cli.registry().get_group("g2").unwrap().children,
        vec!["b".to_string()]
    );
}

#[test]
fn invalid_scale_arguments_fall_back_uniformly() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube");

    ok(&mut cli, "scale cube0 abc");
    let s = cli.registry().get("cube0").unwrap().transform.scale;
    assert_eq!((s.x, s.y, s.z), (1.0, 1.0, 1.0));

    ok(&mut cli, "scale cube0 2");
    let s = cli.registry().get("cube0").unwrap().transform.scale;
    assert_eq!((s.x, s.y, s.z), (2.0, 2.0, 2.0));

    ok(&mut cli, "scale cube0 2 3");
    let s = cli.registry().get("cube0").unwrap().transform.scale;
    assert_eq!((s.x, s.y, s.z), (2.0, 3.0, 2.0));
}

#[test]
fn history_is_capped_by_config() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "config maxHistory 2");
    ok(&mut cli, "cube");
    ok(&mut cli, "sphere");
    ok(&mut cli, "list");

    let recorded: Vec<&str> = cli.history().iter().collect();
    assert_eq!(recorded, ["sphere", "list"]);
}

#[test]
fn config_reports_and_rejects_keys() {
    let mut cli = Interpreter::headless();
    let msg = ok(&mut cli, "config");
    assert!(msg.contains("precision: 6"));
    assert!(msg.contains("autoRender: true"));

    let msg = ok(&mut cli, "config precision 3");
    assert_eq!(msg, "Set precision from 6 to 3");

    assert_eq!(err(&mut cli, "config nonsense 1"), "Unknown config key: nonsense");
}

#[test]
fn keyed_creation_matches_positional_creation() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube 1 1 1 1 2 3 r box_a");
    ok(&mut cli, "cube id=box_b material=r pos=1,2,3");

    let a = cli.registry().get("box_a").unwrap();
    let b = cli.registry().get("box_b").unwrap();
    assert_eq!(a.material, b.material);
    let (pa, pb) = (&a.transform.position, &b.transform.position);
    assert_eq!((pa.x, pa.y, pa.z), (pb.x, pb.y, pb.z));
    assert_eq!(a.geometry.as_ref().unwrap().params, b.geometry.as_ref().unwrap().params);
}

#[test]
fn texture_loads_resolve_on_tick() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube 1 1 1 0 0 0 w box1");

    let msg = ok(&mut cli, r#"texture box1 "wood.jpg" 2 2"#);
    assert_eq!(msg, "Loading texture 'wood.jpg' for 'box1'");
    assert_eq!(cli.pending_texture_loads(), 1);

    cli.tick(0.0);
    assert_eq!(cli.pending_texture_loads(), 0);
    let texture = cli.registry().get("box1").unwrap().material.texture.clone();
    assert_eq!(texture.as_deref(), Some("wood.jpg"));
}

#[test]
fn failed_texture_load_is_swallowed() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube 1 1 1 0 0 0 w box1");
    ok(&mut cli, "texture box1 broken.invalid");

    cli.tick(0.0);
    assert_eq!(cli.pending_texture_loads(), 0);
}

#[test]
fn timeline_fires_once_at_its_offset() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, r#"timeline intro 2 "cube 1 1 1""#);

    cli.tick(0.0); // arms the entry
    cli.tick(1000.0);
    let (objects, _, _) = cli.registry().counts();
    assert_eq!(objects, 0);

    cli.tick(2500.0);
    let (objects, _, _) = cli.registry().counts();
    assert_eq!(objects, 1);

    cli.tick(5000.0); // must not fire again
    let (objects, _, _) = cli.registry().counts();
    assert_eq!(objects, 1);
}

#[test]
fn zoom_halves_the_camera_distance() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "camera move 0 0 8");
    ok(&mut cli, "zoom 2");
    assert!((cli.camera().distance_to_origin() - 4.0).abs() < 1e-4);
}

#[test]
fn orbit_places_and_aims_the_camera() {
    let mut cli = Interpreter::headless();
    let msg = ok(&mut cli, "orbit 10 0 90");
    assert_eq!(msg, "Camera orbiting at radius 10, azimuth 0°, elevation 90°");
    assert!((cli.camera().position.y - 10.0).abs() < 1e-3);
    assert!(cli.camera().target.is_some());
}

#[test]
fn lights_use_their_own_id_prefixes_and_defaults() {
    let mut cli = Interpreter::headless();
    assert_eq!(ok(&mut cli, "al"), "Created ambient light 'ambLight0'");
    assert_eq!(ok(&mut cli, "dl"), "Created directional light 'dirLight1'");
    assert_eq!(ok(&mut cli, "pl 2 5 5 5"), "Created point light 'light2'");
    assert_eq!(ok(&mut cli, "sl"), "Created spot light 'spotLight3'");
    assert_eq!(ok(&mut cli, "hl"), "Created hemisphere light 'hemiLight4'");

    let ambient = cli.registry().get("ambLight0").unwrap();
    assert!((ambient.light.as_ref().unwrap().intensity() - 0.5).abs() < 1e-6);

    // directional lights default to y=10
    let directional = cli.registry().get("dirLight1").unwrap();
    assert!((directional.transform.position.y - 10.0).abs() < 1e-6);

    let point = cli.registry().get("light2").unwrap();
    assert_eq!(point.transform.position.x, 5.0);
}

#[test]
fn clear_empties_the_requested_tables() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube");
    ok(&mut cli, "pl");
    ok(&mut cli, "clear objects");

    let (objects, lights, _) = cli.registry().counts();
    assert_eq!((objects, lights), (0, 1));

    ok(&mut cli, "clear");
    let (_, lights, _) = cli.registry().counts();
    assert_eq!(lights, 0);

    assert_eq!(err(&mut cli, "clear everything"), "Unknown clear type: everything");
}

#[test]
fn clipboard_copy_paste_and_clone() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "sphere 2 32 16 1 1 1 g ball");

    assert_eq!(err(&mut cli, "paste"), "Clipboard is empty");

    ok(&mut cli, "copy ball");
    let msg = ok(&mut cli, "paste ball2 4 0 0");
    assert_eq!(msg, "Pasted as 'ball2'");
    let pasted = cli.registry().get("ball2").unwrap();
    assert_eq!(pasted.transform.position.x, 4.0);
    // unspecified axes keep the source position
    assert_eq!(pasted.transform.position.y, 1.0);

    let msg = ok(&mut cli, "clone ball ball3 0 9 0");
    assert_eq!(msg, "Cloned 'ball' as 'ball3'");
    assert_eq!(cli.registry().get("ball3").unwrap().transform.position.y, 9.0);
}

#[test]
fn distance_respects_precision() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 0 0 w a");
    ok(&mut cli, "c 1 1 1 3 4 0 w b");

    let msg = ok(&mut cli, "distance a b");
    assert_eq!(msg, "Distance between 'a' and 'b': 5.000000");

    ok(&mut cli, "config precision 2");
    assert_eq!(ok(&mut cli, "distance a b"), "Distance between 'a' and 'b': 5.00");
}

#[test]
fn angle_at_the_vertex_in_degrees() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 1 0 0 w a");
    ok(&mut cli, "c 1 1 1 0 0 0 w vertex");
    ok(&mut cli, "c 1 1 1 0 1 0 w b");

    let msg = ok(&mut cli, "angle a vertex b");
    assert_eq!(msg, "Angle at 'vertex' between 'a' and 'b': 90.0 degrees");

    assert!(err(&mut cli, "angle a a b").contains("coincident"));
}

#[test]
fn raycast_reports_the_nearest_object() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 -3 0 w near");
    ok(&mut cli, "c 1 1 1 0 -8 0 w far");

    let msg = ok(&mut cli, "raycast");
    assert!(msg.starts_with("Raycast hit 'near' at distance 2.500"), "{msg}");

    ok(&mut cli, "clear");
    assert_eq!(ok(&mut cli, "raycast"), "No intersections found");
}

#[test]
fn hidden_objects_are_skipped_by_raycasts() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 -3 0 w box1");
    ok(&mut cli, "hide box1");
    assert_eq!(ok(&mut cli, "raycast"), "No intersections found");

    ok(&mut cli, "show box1");
    assert!(ok(&mut cli, "raycast").starts_with("Raycast hit 'box1'"));
}

#[test]
fn save_and_load_round_trip_through_slots() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 1 2 3 w box1");
    ok(&mut cli, "save checkpoint");

    ok(&mut cli, "move box1 0 0 0");
    ok(&mut cli, "load checkpoint");

    let p = cli.registry().get("box1").unwrap();
    // the engine restores node transforms; registry state is not rewound
    assert!(cli.engine().bounding_box(p.node).is_some());

    assert_eq!(
        err(&mut cli, "load nowhere"),
        "No saved scene in slot 'nowhere'"
    );
}

#[test]
fn material_commands_mutate_the_entity() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube 1 1 1 0 0 0 w box1");

    ok(&mut cli, "cl box1 #ff6600");
    let mat = cli.registry().get("box1").unwrap().material.clone();
    assert_eq!(mat.color.to_rgb8(), [255, 102, 0]);

    ok(&mut cli, "opacity box1 0.5");
    let mat = cli.registry().get("box1").unwrap().material.clone();
    assert!(mat.transparent);

    assert_eq!(ok(&mut cli, "wireframe box1"), "Wireframe enabled for 'box1'");
    assert_eq!(ok(&mut cli, "wireframe box1"), "Wireframe disabled for 'box1'");

    ok(&mut cli, "mt box1 phong color red opacity 0.25");
    let mat = cli.registry().get("box1").unwrap().material.clone();
    assert_eq!(mat.shading.name(), "phong");
    assert_eq!(mat.color.to_rgb8(), [255, 0, 0]);

    assert_eq!(
        err(&mut cli, "mt ghost phong"),
        "Object 'ghost' not found or has no material"
    );
}

#[test]
fn list_filters_by_substring() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "c 1 1 1 0 0 0 w box_a");
    ok(&mut cli, "c 1 1 1 0 0 0 w box_b");
    ok(&mut cli, "s 1 32 16 0 0 0 w ball");
    ok(&mut cli, "pl");

    let msg = ok(&mut cli, "list box");
    assert_eq!(msg, "Objects: box_a, box_b");

    let msg = ok(&mut cli, "list");
    assert!(msg.contains("Objects: ball, box_a, box_b"));
    assert!(msg.contains("Lights: light3"));

    ok(&mut cli, "clear");
    assert_eq!(ok(&mut cli, "list"), "No objects found");
}

#[test]
fn select_tracks_a_single_entity() {
    let mut cli = Interpreter::headless();
    ok(&mut cli, "cube");
    ok(&mut cli, "select cube0");
    assert_eq!(cli.selected(), Some("cube0"));

    ok(&mut cli, "delete cube0");
    assert_eq!(cli.selected(), None);

    ok(&mut cli, "deselect");
    assert_eq!(err(&mut cli, "select ghost"), "Object 'ghost' not found");
}
