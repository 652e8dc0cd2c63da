//! The built-in curriculum: six categories, thirty-three items.
//!
//! Ids are part of the persisted format. Never renumber an existing item; append new
//! items with fresh ids instead.

use crate::model::{Category, ItemId, LearningItem};

struct CategorySeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    items: &'static [(ItemId, &'static str)],
}

const SEED: &[CategorySeed] = &[
    CategorySeed {
        id: "algorithm",
        name: "Algorithmic Complexity",
        description: "Big-O notation and algorithm analysis",
        icon: "📊",
        color: "#3b82f6",
        items: &[
            (1, "Learn algorithmic complexity / Big-O / asymptotic analysis"),
            (2, "Understand time and space complexity"),
            (3, "Practice analyzing algorithm efficiency"),
            (4, "Master the common complexity classes"),
        ],
    },
    CategorySeed {
        id: "datastructure",
        name: "Data Structures",
        description: "Implementing and applying the fundamental data structures",
        icon: "🏗️",
        color: "#10b981",
        items: &[
            (5, "Implement a dynamic array"),
            (6, "Understand array time complexity"),
            (7, "Implement a singly linked list"),
            (8, "Implement a doubly linked list"),
            (9, "Implement a stack"),
            (10, "Implement a queue"),
            (11, "Implement a hash table"),
            (12, "Understand hash collision handling"),
        ],
    },
    CategorySeed {
        id: "sorting",
        name: "Sorting Algorithms",
        description: "Implementing and comparing the classic sorting algorithms",
        icon: "🔄",
        color: "#f59e0b",
        items: &[
            (13, "Implement bubble sort"),
            (14, "Implement selection sort"),
            (15, "Implement insertion sort"),
            (16, "Implement merge sort"),
            (17, "Implement quicksort"),
            (18, "Implement heapsort"),
        ],
    },
    CategorySeed {
        id: "tree",
        name: "Trees",
        description: "Binary trees, BSTs and balanced trees",
        icon: "🌳",
        color: "#8b5cf6",
        items: &[
            (19, "Understand binary tree basics"),
            (20, "Implement a binary search tree (BST)"),
            (21, "Tree traversals (pre-order, in-order, post-order)"),
            (22, "Implement an AVL tree"),
            (23, "Understand red-black trees"),
        ],
    },
    CategorySeed {
        id: "graph",
        name: "Graphs",
        description: "Graph representations and the basic graph algorithms",
        icon: "🕸️",
        color: "#ef4444",
        items: &[
            (24, "Graph representations (adjacency matrix, adjacency list)"),
            (25, "Breadth-first search (BFS)"),
            (26, "Depth-first search (DFS)"),
            (27, "Dijkstra's shortest path algorithm"),
            (28, "Minimum spanning trees (Kruskal, Prim)"),
        ],
    },
    CategorySeed {
        id: "dynamic",
        name: "Dynamic Programming",
        description: "The dynamic programming mindset and its classic problems",
        icon: "🧩",
        color: "#06b6d4",
        items: &[
            (29, "Understand the basics of dynamic programming"),
            (30, "Knapsack problem"),
            (31, "Longest common subsequence (LCS)"),
            (32, "Longest increasing subsequence (LIS)"),
            (33, "Edit distance"),
        ],
    },
];

pub(super) fn categories() -> Vec<Category> {
    SEED.iter()
        .map(|seed| Category {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            icon: seed.icon.to_string(),
            color: seed.color.to_string(),
            items: seed
                .items
                .iter()
                .map(|(id, title)| LearningItem::new(*id, *title, seed.id))
                .collect(),
        })
        .collect()
}
