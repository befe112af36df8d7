use loadorder_sorter::{ConstraintGraph, GameSession, PluginRegistry, effective_priorities};
use loadorder_types::{Plugin, PluginMetadata, PluginName};

fn position(registry: &PluginRegistry, name: &str) -> usize {
    registry
        .position_of(&PluginName::new(name))
        .expect("plugin should be loaded")
}

#[test]
fn empty_registry_builds_empty_graph() {
    let registry = PluginRegistry::from_session(&GameSession::new());
    let graph = ConstraintGraph::build(&registry);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.find_cycle().is_none());
}

#[test]
fn master_dependency_adds_edge() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank - Master Dependent.esp", false).with_masters(["Blank.esm"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    let esm = position(&registry, "Blank.esm");
    let esp = position(&registry, "Blank - Master Dependent.esp");

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_ordered(esm, esp));
    assert_eq!(graph.in_degrees(), vec![0, 1]);
}

#[test]
fn requirement_metadata_adds_edge() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.add_plugin(Plugin::new("Blank - Different.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_requirements(["Blank - Different.esp"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);

    assert!(graph.is_ordered(
        position(&registry, "Blank - Different.esp"),
        position(&registry, "Blank.esp")
    ));
}

#[test]
fn load_after_metadata_adds_edge() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.add_plugin(Plugin::new("Blank - Different.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_load_after(["Blank - Different.esp"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);

    assert!(graph.is_ordered(
        position(&registry, "Blank - Different.esp"),
        position(&registry, "Blank.esp")
    ));
}

#[test]
fn dangling_reference_is_skipped() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_requirements(["Missing.esm"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn self_reference_is_skipped() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_load_after(["blank.esp"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.find_cycle().is_none());
}

#[test]
fn duplicate_references_add_one_edge() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.add_plugin(Plugin::new("Blank - Different.esp", false));
    // Same target spelled twice with different casing.
    session.userlist_mut().add(
        PluginMetadata::new("Blank.esp")
            .with_load_after(["Blank - Different.esp", "blank - different.ESP"]),
    );

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn class_edges_order_masters_before_others() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank - Different.esm", true));
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.add_plugin(Plugin::new("Blank - Different.esp", false));

    let registry = PluginRegistry::from_session(&session);
    let mut graph = ConstraintGraph::build(&registry);
    assert_eq!(graph.edge_count(), 0);

    let effective = effective_priorities(&graph);
    graph.add_class_edges(&effective);
    assert_eq!(graph.edge_count(), 4);
    for esm in ["Blank.esm", "Blank - Different.esm"] {
        for esp in ["Blank.esp", "Blank - Different.esp"] {
            assert!(graph.is_ordered(position(&registry, esm), position(&registry, esp)));
        }
    }
}

#[test]
fn class_edge_not_duplicated_over_master_edge() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank - Master Dependent.esp", false).with_masters(["Blank.esm"]));

    let registry = PluginRegistry::from_session(&session);
    let mut graph = ConstraintGraph::build(&registry);
    let effective = effective_priorities(&graph);
    graph.add_class_edges(&effective);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn class_edge_suppressed_for_honored_cross_class_priority() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.userlist_mut().add(
        PluginMetadata::new("Blank.esp")
            .with_priority(-100_000)
            .with_priority_global(true),
    );

    let registry = PluginRegistry::from_session(&session);
    let mut graph = ConstraintGraph::build(&registry);
    let effective = effective_priorities(&graph);
    graph.add_class_edges(&effective);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn class_edge_kept_without_global_flag() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_priority(-100_000));

    let registry = PluginRegistry::from_session(&session);
    let mut graph = ConstraintGraph::build(&registry);
    let effective = effective_priorities(&graph);
    graph.add_class_edges(&effective);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn class_edge_kept_for_equal_global_priorities() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session.add_plugin(Plugin::new("Blank.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_priority_global(true));

    let registry = PluginRegistry::from_session(&session);
    let mut graph = ConstraintGraph::build(&registry);
    let effective = effective_priorities(&graph);
    graph.add_class_edges(&effective);
    // Equal priorities leave the masters-first default in place.
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn mutual_load_after_forms_cycle() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esp", false));
    session.add_plugin(Plugin::new("Blank - Different.esp", false));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esp").with_load_after(["Blank - Different.esp"]));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank - Different.esp").with_load_after(["Blank.esp"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    let cycle = graph.find_cycle().expect("cycle should be detected");
    assert_eq!(cycle.len(), 2);
}

#[test]
fn master_and_load_after_conflict_forms_cycle() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("Blank.esm", true));
    session
        .add_plugin(Plugin::new("Blank - Master Dependent.esm", true).with_masters(["Blank.esm"]));
    session
        .userlist_mut()
        .add(PluginMetadata::new("Blank.esm").with_load_after(["Blank - Master Dependent.esm"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    assert!(graph.find_cycle().is_some());
}

#[test]
fn acyclic_chain_has_no_cycle() {
    let mut session = GameSession::new();
    session.add_plugin(Plugin::new("A.esp", false));
    session.add_plugin(Plugin::new("B.esp", false).with_masters(["A.esp"]));
    session.add_plugin(Plugin::new("C.esp", false).with_masters(["B.esp"]));

    let registry = PluginRegistry::from_session(&session);
    let graph = ConstraintGraph::build(&registry);
    assert!(graph.find_cycle().is_none());
}
