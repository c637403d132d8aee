// Bundled todo application
//
// A single-file rendition of the public TodoMVC application, close enough
// to the reference DOM that every selector in `selectors` resolves the
// same way against both. The scenario tests serve this document from a
// local port; setting TODO_APP_URL swaps in a live instance.
//
// Contract the document upholds:
// - `.new-todo` appends a trimmed, non-empty value on Enter and clears
// - rows are `.todo-list li` with `input.toggle`, a `label`, and a
//   hover-revealed `button.destroy`; completed rows carry the `completed`
//   class and a struck-through label
// - double-clicking a label enters edit mode; Enter commits, Escape
//   cancels, an empty commit deletes the row
// - `#/`, `#/active`, `#/completed` hash routes filter the rendered list
//   and mark the matching footer link `selected`
// - `.clear-completed` exists only while at least one item is completed,
//   and clicking it deletes those items outright

/// Seed titles used across the scenario tests.
pub const TODO_ITEMS: [&str; 2] = [
    "complete code challenge",
    "ensure coverage for all items is automated",
];

/// The served todo application document.
pub const TODO_APP_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>TodoMVC</title>
<style>
  body {
    font: 14px 'Helvetica Neue', Helvetica, Arial, sans-serif;
    background: #f5f5f5;
    color: #111;
    margin: 0 auto;
    max-width: 550px;
  }
  h1 {
    font-size: 80px;
    font-weight: 200;
    text-align: center;
    color: #b83f45;
  }
  .todoapp {
    background: #fff;
    box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.2);
  }
  .new-todo {
    width: 100%;
    font-size: 24px;
    padding: 16px;
    border: none;
    box-sizing: border-box;
  }
  .main {
    border-top: 1px solid #e6e6e6;
  }
  .toggle-all-container {
    padding: 4px 8px;
  }
  .todo-list {
    margin: 0;
    padding: 0;
    list-style: none;
  }
  .todo-list li {
    position: relative;
    font-size: 24px;
    border-bottom: 1px solid #ededed;
  }
  .todo-list li .view {
    display: flex;
    align-items: center;
    padding: 8px;
  }
  .todo-list li .toggle {
    width: 40px;
    height: 40px;
  }
  .todo-list li label {
    flex: 1;
    padding: 8px;
    word-break: break-all;
  }
  .todo-list li.completed label {
    color: #949494;
    text-decoration: line-through;
  }
  .todo-list li .destroy {
    display: none;
    width: 40px;
    height: 40px;
    border: none;
    background: none;
    color: #949494;
    font-size: 30px;
    cursor: pointer;
  }
  .todo-list li:hover .destroy {
    display: block;
  }
  .todo-list li .edit {
    display: none;
  }
  .todo-list li.editing .view {
    display: none;
  }
  .todo-list li.editing .edit {
    display: block;
    width: 100%;
    font-size: 24px;
    padding: 8px;
    box-sizing: border-box;
  }
  .footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 10px 15px;
    border-top: 1px solid #e6e6e6;
    color: #777;
  }
  .filters {
    display: flex;
    gap: 6px;
    margin: 0;
    padding: 0;
    list-style: none;
  }
  .filters a {
    color: inherit;
    text-decoration: none;
    padding: 3px 7px;
    border: 1px solid transparent;
    border-radius: 3px;
  }
  .filters a.selected {
    border-color: #ce4646;
  }
  .clear-completed {
    border: none;
    background: none;
    color: inherit;
    font-size: inherit;
    cursor: pointer;
  }
  .clear-completed:hover {
    text-decoration: underline;
  }
  .hidden {
    display: none;
  }
</style>
</head>
<body>
<section class="todoapp">
  <header class="header">
    <h1>todos</h1>
    <input class="new-todo" placeholder="What needs to be done?" autofocus>
  </header>
  <main class="main hidden">
    <div class="toggle-all-container">
      <input class="toggle-all" id="toggle-all" type="checkbox">
      <label for="toggle-all">Mark all as complete</label>
    </div>
    <ul class="todo-list"></ul>
  </main>
  <footer class="footer hidden">
    <span class="todo-count"></span>
    <ul class="filters">
      <li><a href="#/">All</a></li>
      <li><a href="#/active">Active</a></li>
      <li><a href="#/completed">Completed</a></li>
    </ul>
  </footer>
</section>
<script>
(function () {
  'use strict';

  let todos = [];
  let editingIndex = null;

  const newTodo = document.querySelector('.new-todo');
  const main = document.querySelector('.main');
  const list = document.querySelector('.todo-list');
  const footer = document.querySelector('.footer');
  const counter = document.querySelector('.todo-count');
  const filterLinks = document.querySelectorAll('.filters a');
  const toggleAll = document.querySelector('.toggle-all');

  function currentFilter() {
    switch (location.hash) {
      case '#/active':
        return 'active';
      case '#/completed':
        return 'completed';
      default:
        return 'all';
    }
  }

  function matchesFilter(todo, filter) {
    if (filter === 'active') return !todo.completed;
    if (filter === 'completed') return todo.completed;
    return true;
  }

  function escapeHtml(text) {
    const probe = document.createElement('div');
    probe.textContent = text;
    return probe.innerHTML;
  }

  function rowHtml(todo, index) {
    const classes = [];
    if (todo.completed) classes.push('completed');
    if (index === editingIndex) classes.push('editing');
    const classAttr = classes.length ? ' class="' + classes.join(' ') + '"' : '';
    const title = escapeHtml(todo.title);
    return (
      '<li data-index="' + index + '"' + classAttr + '>' +
        '<div class="view">' +
          '<input class="toggle" type="checkbox" aria-label="Toggle Todo"' +
            (todo.completed ? ' checked' : '') + '>' +
          '<label data-testid="todo-title">' + title + '</label>' +
          '<button class="destroy" aria-label="Delete">×</button>' +
        '</div>' +
        '<input class="edit" value="' + title.replace(/"/g, '&quot;') + '">' +
      '</li>'
    );
  }

  function render() {
    const filter = currentFilter();
    main.classList.toggle('hidden', todos.length === 0);
    footer.classList.toggle('hidden', todos.length === 0);

    list.innerHTML = todos
      .map(function (todo, index) {
        return matchesFilter(todo, filter) ? rowHtml(todo, index) : '';
      })
      .join('');

    const active = todos.filter(function (todo) { return !todo.completed; }).length;
    const completed = todos.length - active;
    counter.innerHTML =
      '<strong>' + active + '</strong> ' + (active === 1 ? 'item' : 'items') + ' left';

    const clearButton = footer.querySelector('.clear-completed');
    if (completed > 0 && !clearButton) {
      const button = document.createElement('button');
      button.className = 'clear-completed';
      button.textContent = 'Clear completed';
      button.addEventListener('click', function () {
        todos = todos.filter(function (todo) { return !todo.completed; });
        render();
      });
      footer.appendChild(button);
    } else if (completed === 0 && clearButton) {
      clearButton.remove();
    }

    toggleAll.checked = todos.length > 0 && active === 0;

    const fragment = filter === 'all' ? '#/' : '#/' + filter;
    filterLinks.forEach(function (link) {
      link.classList.toggle('selected', link.getAttribute('href') === fragment);
    });

    if (editingIndex !== null) {
      const field = list.querySelector('li.editing .edit');
      if (field) {
        field.focus();
        field.setSelectionRange(field.value.length, field.value.length);
      }
    }
  }

  function rowIndex(element) {
    return Number(element.closest('li').dataset.index);
  }

  function commitEdit(field) {
    const index = rowIndex(field);
    const title = field.value.trim();
    editingIndex = null;
    if (title === '') {
      todos.splice(index, 1);
    } else {
      todos[index].title = title;
    }
    render();
  }

  newTodo.addEventListener('keydown', function (event) {
    if (event.key !== 'Enter') return;
    const title = newTodo.value.trim();
    if (title === '') return;
    todos.push({ title: title, completed: false });
    newTodo.value = '';
    render();
  });

  list.addEventListener('change', function (event) {
    if (!event.target.classList.contains('toggle')) return;
    todos[rowIndex(event.target)].completed = event.target.checked;
    render();
  });

  list.addEventListener('click', function (event) {
    if (!event.target.classList.contains('destroy')) return;
    todos.splice(rowIndex(event.target), 1);
    render();
  });

  list.addEventListener('dblclick', function (event) {
    if (event.target.tagName !== 'LABEL') return;
    editingIndex = rowIndex(event.target);
    render();
  });

  list.addEventListener('keydown', function (event) {
    if (!event.target.classList.contains('edit')) return;
    if (event.key === 'Enter') {
      commitEdit(event.target);
    } else if (event.key === 'Escape') {
      editingIndex = null;
      render();
    }
  });

  // focusout instead of blur: blur does not bubble to the list.
  list.addEventListener('focusout', function (event) {
    if (!event.target.classList.contains('edit')) return;
    if (editingIndex === null) return;
    commitEdit(event.target);
  });

  toggleAll.addEventListener('change', function () {
    const completed = toggleAll.checked;
    todos.forEach(function (todo) { todo.completed = completed; });
    render();
  });

  window.addEventListener('hashchange', render);
  render();
})();
</script>
</body>
</html>
"##;
