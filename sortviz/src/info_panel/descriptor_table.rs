// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Algorithm, AlgorithmDescriptor, Complexity};

#[must_use]
pub fn descriptor(algorithm: Algorithm) -> &'static AlgorithmDescriptor {
    match algorithm {
        Algorithm::Bubble => &BUBBLE,
        Algorithm::Selection => &SELECTION,
        Algorithm::Insertion => &INSERTION,
        Algorithm::Merge => &MERGE,
    }
}

const QUADRATIC: &str = "O(n²)";
const CONSTANT: &str = "O(1)";
const N_LOG_N: &str = "O(n log n)";

static BUBBLE: AlgorithmDescriptor = AlgorithmDescriptor {
    title: "Bubble Sort",
    description: "Bubble Sort repeatedly swaps adjacent elements if they are in the wrong order.",
    complexity: Complexity {
        best: "O(n)",
        average: QUADRATIC,
        worst: QUADRATIC,
        space: CONSTANT,
    },
    pros: &["Simple to implement", "Best case O(n) when nearly sorted"],
    cons: &["Slow for large inputs", "Too many swaps"],
    pseudocode: &[
        "repeat n-1 times",
        "  for i from 0 to n-2",
        "    if A[i] > A[i+1]",
        "      swap(A[i], A[i+1])",
    ],
    cpp: &[
        "void bubbleSort(int arr[], int n) {",
        "  for (int i = 0; i < n-1; i++)",
        "    for (int j = 0; j < n-i-1; j++)",
        "      if (arr[j] > arr[j+1])",
        "        swap(arr[j], arr[j+1]);",
        "}",
    ],
    java: &[
        "void bubbleSort(int arr[]) {",
        "  int n = arr.length;",
        "  for (int i = 0; i < n-1; i++)",
        "    for (int j = 0; j < n-i-1; j++)",
        "      if (arr[j] > arr[j+1]) {",
        "        int t = arr[j]; arr[j] = arr[j+1]; arr[j+1] = t;",
        "      }",
        "}",
    ],
};

static SELECTION: AlgorithmDescriptor = AlgorithmDescriptor {
    title: "Selection Sort",
    description: "Selection Sort selects the minimum element from the unsorted part and swaps it.",
    complexity: Complexity {
        best: QUADRATIC,
        average: QUADRATIC,
        worst: QUADRATIC,
        space: CONSTANT,
    },
    pros: &["Simple implementation", "Minimum swaps"],
    cons: &["Always O(n²)", "Not stable"],
    pseudocode: &[
        "for i from 0 to n-1",
        "  minIndex = i",
        "  for j from i+1 to n-1",
        "    if A[j] < A[minIndex]",
        "      minIndex = j",
        "  swap(A[i], A[minIndex])",
    ],
    cpp: &[
        "void selectionSort(int arr[], int n) {",
        "  for (int i = 0; i < n-1; i++) {",
        "    int min = i;",
        "    for (int j = i+1; j < n; j++)",
        "      if (arr[j] < arr[min]) min = j;",
        "    swap(arr[i], arr[min]);",
        "  }",
        "}",
    ],
    java: &[
        "void selectionSort(int arr[]) {",
        "  int n = arr.length;",
        "  for (int i = 0; i < n-1; i++) {",
        "    int min = i;",
        "    for (int j = i+1; j < n; j++)",
        "      if (arr[j] < arr[min]) min = j;",
        "    int t = arr[min]; arr[min] = arr[i]; arr[i] = t;",
        "  }",
        "}",
    ],
};

static INSERTION: AlgorithmDescriptor = AlgorithmDescriptor {
    title: "Insertion Sort",
    description: "Insertion Sort builds the sorted array one item at a time.",
    complexity: Complexity {
        best: "O(n)",
        average: QUADRATIC,
        worst: QUADRATIC,
        space: CONSTANT,
    },
    pros: &["Fast for small inputs", "Stable"],
    cons: &["Slow for large arrays"],
    pseudocode: &[
        "for i from 1 to n-1",
        "  key = A[i]",
        "  j = i-1",
        "  while j>=0 and A[j] > key",
        "    A[j+1] = A[j]",
        "    j--",
        "  A[j+1] = key",
    ],
    cpp: &[
        "void insertionSort(int arr[], int n) {",
        "  for (int i = 1; i < n; i++) {",
        "    int key = arr[i], j = i-1;",
        "    while (j >= 0 && arr[j] > key) {",
        "      arr[j+1] = arr[j]; j--;",
        "    }",
        "    arr[j+1] = key;",
        "  }",
        "}",
    ],
    java: &[
        "void insertionSort(int arr[]) {",
        "  int n = arr.length;",
        "  for (int i = 1; i < n; i++) {",
        "    int key = arr[i], j = i-1;",
        "    while (j >= 0 && arr[j] > key) {",
        "      arr[j+1] = arr[j]; j--;",
        "    }",
        "    arr[j+1] = key;",
        "  }",
        "}",
    ],
};

static MERGE: AlgorithmDescriptor = AlgorithmDescriptor {
    title: "Merge Sort",
    description: "Merge Sort divides the array and merges sorted halves.",
    complexity: Complexity {
        best: N_LOG_N,
        average: N_LOG_N,
        worst: N_LOG_N,
        space: "O(n)",
    },
    pros: &["Fast and stable", "Consistent O(n log n)"],
    cons: &["Needs extra space", "More complex"],
    pseudocode: &[
        "if left < right",
        "  mid = (left+right)/2",
        "  mergeSort(A,left,mid)",
        "  mergeSort(A,mid+1,right)",
        "  merge(A,left,mid,right)",
    ],
    cpp: &[
        "void mergeSort(int arr[], int l, int r) {",
        "  if (l >= r) return;",
        "  int m = (l+r)/2;",
        "  mergeSort(arr,l,m);",
        "  mergeSort(arr,m+1,r);",
        "  merge(arr,l,m,r);",
        "}",
    ],
    java: &[
        "void mergeSort(int arr[], int l, int r) {",
        "  if (l >= r) return;",
        "  int m = (l+r)/2;",
        "  mergeSort(arr,l,m);",
        "  mergeSort(arr,m+1,r);",
        "  merge(arr,l,m,r);",
        "}",
    ],
};
