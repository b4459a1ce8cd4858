//! Compiled-in default content.
//!
//! These values seed every slice on first launch and whenever a stored
//! slice is missing, malformed, or tagged with a stale schema version.
//! Editing happens at runtime through the admin surface; this module is
//! only the factory state.

use crate::content::{
    icon::IconKey,
    model::{
        AppConfig, ChartPoint, HomeModule, HpcItem, Product, ProductVariant, ProtocolConcept,
        ProtocolMechanism, RoadmapCategory, RoadmapItem,
    },
};
use std::collections::BTreeMap;

pub fn app_config() -> AppConfig {
    AppConfig {
        hero_label: "Interactive Learning Module".into(),
        hero_title: "Networking for".into(),
        hero_highlight: "AI Workloads".into(),
        hero_subtitle: "Master modern AI fabrics, RoCE, congestion control, and data-plane \
                        behavior through interactive visuals and engineering breakdowns."
            .into(),
    }
}

pub fn home_modules() -> Vec<HomeModule> {
    let module = |id: &str, title: &str, subtitle: &str, icon_key, progress, href: &str, color: &str| {
        HomeModule {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            icon_key,
            progress,
            href: href.into(),
            color: color.into(),
        }
    };
    vec![
        module(
            "mod_1",
            "Fundamentals",
            "AI fabric basics and the shift from InfiniBand.",
            IconKey::Layers,
            100,
            "#architecture",
            "blue",
        ),
        module(
            "mod_2",
            "Core Technologies",
            "RDMA, NVMe-oF, and the mechanics of zero-copy networking.",
            IconKey::Cpu,
            45,
            "#concepts",
            "purple",
        ),
        module(
            "mod_3",
            "Protocols & Data Flow",
            "RoCEv2 vs Ultra Ethernet, packet spraying, selective retry.",
            IconKey::Network,
            70,
            "#protocols",
            "indigo",
        ),
        module(
            "mod_4",
            "Congestion & Performance",
            "ECN, PFC, head-of-line blocking, job completion time.",
            IconKey::Activity,
            30,
            "#performance",
            "red",
        ),
        module(
            "mod_5",
            "Hardware Platforms",
            "Deep buffers, VOQ, and modular spines.",
            IconKey::Server,
            15,
            "#hardware",
            "cyan",
        ),
        module(
            "mod_6",
            "AI vs HPC",
            "Traffic patterns and synchronization barriers compared.",
            IconKey::GitMerge,
            85,
            "#hpc",
            "emerald",
        ),
    ]
}

pub fn glossary() -> BTreeMap<String, String> {
    [
        (
            "RoCEv2",
            "Version 2 of RDMA over Converged Ethernet, routing packets over \
             Layer 3 (IP/UDP) networks for data-center scalability.",
        ),
        (
            "PFC",
            "Priority Flow Control. A Layer 2 mechanism that pauses traffic for \
             specific classes of service to prevent buffer overflow, essential \
             for lossless Ethernet.",
        ),
        (
            "ECN",
            "Explicit Congestion Notification. Switches mark packets to signal \
             incipient congestion, prompting the sender to slow down.",
        ),
        (
            "Incast",
            "A traffic pattern where many senders hit a single receiver at \
             once, often causing microbursts and buffer exhaustion.",
        ),
        (
            "Microburst",
            "A sudden traffic spike lasting microseconds: too fast for polling \
             to detect, large enough to overflow shallow buffers.",
        ),
        (
            "Head-of-Line Blocking",
            "Packets held up behind the first packet of a queue, stalling \
             traffic that could otherwise proceed.",
        ),
        (
            "VOQ",
            "Virtual Output Queuing. Ingress buffering keyed by egress \
             destination, eliminating head-of-line blocking.",
        ),
        (
            "Leaf-Spine",
            "A two-tier topology where every leaf switch connects to every \
             spine switch, keeping hop count and bandwidth consistent.",
        ),
        (
            "Tail Latency",
            "The latency of the slowest percentile of requests. In AI training \
             the tail defines the step time of the whole cluster.",
        ),
        (
            "Packet Spraying",
            "Load balancing that spreads packets of a single flow across many \
             paths simultaneously to maximize utilization.",
        ),
        (
            "All-Reduce",
            "The collective operation aggregating data from all nodes and \
             distributing the result back — the workhorse of LLM training.",
        ),
        (
            "JCT",
            "Job Completion Time. The total time to train a model, directly \
             impacted by network tail latency.",
        ),
    ]
    .into_iter()
    .map(|(term, definition)| (term.to_owned(), definition.to_owned()))
    .collect()
}

pub fn performance_data() -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            name: "Standard Ethernet".into(),
            efficiency: Some(60.0),
            delay: None,
            fill: Some("#64748b".into()),
        },
        ChartPoint {
            name: "Lossless AI Fabric".into(),
            efficiency: Some(99.0),
            delay: None,
            fill: Some("#38bdf8".into()),
        },
    ]
}

pub fn failover_data() -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            name: "InfiniBand".into(),
            efficiency: None,
            delay: Some(100.0),
            fill: Some("#ef4444".into()),
        },
        ChartPoint {
            name: "Ethernet Fabric".into(),
            efficiency: None,
            delay: Some(3.3),
            fill: Some("#22c55e".into()),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "7060X".into(),
            series: "7060X Series".into(),
            role: "Fixed AI Leaf".into(),
            icon_key: IconKey::Server,
            desc: "High-capacity, low-latency Ethernet switching optimized for AI \
                   leaf roles, in fixed form factors for high-radix topologies."
                .into(),
            specs: vec![
                "51.2T Capacity".into(),
                "800G OSFP".into(),
                "LPO Support".into(),
            ],
            scale: "High-Scale AI Clusters".into(),
            variants: vec![
                ProductVariant {
                    name: "7060X6-64PE".into(),
                    chip: "Tomahawk".into(),
                    capacity: "51.2T".into(),
                    ports: "64x 800G".into(),
                    form_factor: "2RU".into(),
                },
                ProductVariant {
                    name: "7060X6-32PE".into(),
                    chip: "Tomahawk".into(),
                    capacity: "25.6T".into(),
                    ports: "32x 800G".into(),
                    form_factor: "1RU".into(),
                },
            ],
            key_features: vec![],
            datasheet_url: None,
        },
        Product {
            id: "7800R".into(),
            series: "7800R Series".into(),
            role: "Modular AI Spine".into(),
            icon_key: IconKey::Database,
            desc: "Deep-buffer modular chassis with virtual output queuing for \
                   lossless spine roles at cluster scale.".into(),
            specs: vec![
                "Deep Buffers".into(),
                "VOQ Fabric".into(),
                "460T per Chassis".into(),
            ],
            scale: "Cluster Spine".into(),
            variants: vec![],
            key_features: vec![],
            datasheet_url: None,
        },
    ]
}

pub fn protocol_concepts() -> Vec<ProtocolConcept> {
    vec![
        ProtocolConcept {
            id: "roce".into(),
            title: "RoCEv2".into(),
            subtitle: "Current Standard".into(),
            description: "RDMA over Converged Ethernet. Relies on lossless network \
                          behavior to function efficiently."
                .into(),
            icon_key: IconKey::Activity,
            color: "blue".into(),
            mechanisms: vec![
                ProtocolMechanism {
                    name: "PFC (Priority Flow Control)".into(),
                    desc: "Pauses upstream senders before the ingress buffer \
                           overflows, hop by hop."
                        .into(),
                    icon_key: IconKey::ShieldCheck,
                },
                ProtocolMechanism {
                    name: "ECN (Congestion Notification)".into(),
                    desc: "Marks packets at incipient congestion so senders slow \
                           down before loss occurs."
                        .into(),
                    icon_key: IconKey::Radio,
                },
            ],
        },
        ProtocolConcept {
            id: "uet".into(),
            title: "Ultra Ethernet".into(),
            subtitle: "Next Generation".into(),
            description: "The UEC transport: packet spraying, flexible ordering and \
                          selective retransmission, designed to tolerate loss."
                .into(),
            icon_key: IconKey::Rocket,
            color: "purple".into(),
            mechanisms: vec![
                ProtocolMechanism {
                    name: "Packet Spraying".into(),
                    desc: "Sprays one flow across all available paths to erase \
                           hotspots."
                        .into(),
                    icon_key: IconKey::Network,
                },
                ProtocolMechanism {
                    name: "Selective Retry".into(),
                    desc: "Retransmits only the dropped packets instead of \
                           rolling the whole window back."
                        .into(),
                    icon_key: IconKey::GitMerge,
                },
            ],
        },
    ]
}

pub fn hpc_checklist() -> Vec<HpcItem> {
    let item = |title: &str, icon_key, points: &[&str]| HpcItem {
        title: title.into(),
        icon_key,
        points: points.iter().map(|p| (*p).to_owned()).collect(),
    };
    vec![
        item(
            "Collective Acceleration",
            IconKey::Zap,
            &[
                "Adaptive routing reduces completion times.",
                "Consistent step times keep GPU utilization high.",
            ],
        ),
        item(
            "Lossless Fabric",
            IconKey::Layers,
            &[
                "Jobs don't stall on microbursts or queue buildup.",
                "Tuned ECN and AQM bound tail latency under collective load.",
            ],
        ),
        item(
            "GPU Scale-Out",
            IconKey::Network,
            &[
                "Deterministic latency to 10k+ GPUs.",
                "Ultra-high radix switches mean fewer hops.",
            ],
        ),
        item(
            "Visibility for Debugging",
            IconKey::BarChart2,
            &[
                "Pinpoint which link or host caused a slowdown.",
                "Identify stragglers instantly.",
            ],
        ),
        item(
            "Storage-to-GPU Pipeline",
            IconKey::Database,
            &[
                "Balanced performance for object storage and shuffle phases.",
                "Smooth checkpointing without network stalls.",
            ],
        ),
    ]
}

pub fn roadmap() -> Vec<RoadmapCategory> {
    vec![
        RoadmapCategory {
            category: "User Experience & Design".into(),
            color: "blue".into(),
            icon_key: IconKey::Eye,
            items: vec![
                RoadmapItem {
                    title: "Keyboard Navigation".into(),
                    desc: "Full tab support for the interactive simulations.".into(),
                    icon_key: IconKey::Box,
                },
                RoadmapItem {
                    title: "High Contrast Mode".into(),
                    desc: "Toggleable themes for users with visual impairments.".into(),
                    icon_key: IconKey::Eye,
                },
            ],
        },
        RoadmapCategory {
            category: "Content Depth & Resources".into(),
            color: "emerald".into(),
            icon_key: IconKey::BookOpen,
            items: vec![
                RoadmapItem {
                    title: "Expanded Glossary".into(),
                    desc: "Comprehensive 50+ term dictionary with direct links.".into(),
                    icon_key: IconKey::BookOpen,
                },
                RoadmapItem {
                    title: "Downloadable Cheatsheets".into(),
                    desc: "PDF summaries of RoCEv2 headers and congestion control.".into(),
                    icon_key: IconKey::Leaf,
                },
            ],
        },
    ]
}
