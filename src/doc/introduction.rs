/*!
# Introductory Tutorial for Brace

Start the executable with no arguments to get the interactive prompt.
Type CTRL-D to exit. Stop a running word with CTRL-C.

Everything you type is split on whitespace into tokens. Each token is run
as soon as it is read, left to right. Numbers push themselves on to the
data stack and words take their arguments from it.

<pre><code>&nbsp;> 1 2 + .
&nbsp;  3
</code></pre>

`.` pops the top of the stack and prints it. `.s` prints the whole stack
without changing it, the top of the stack rightmost, after a count.

<pre><code>&nbsp;> 1 2 3 .s
&nbsp;  &lt;3&gt; 1 2 3
&nbsp;> rot .s
&nbsp;  &lt;3&gt; 2 3 1
</code></pre>

## Strings

A token beginning with a single quote is a string. There are no spaces
inside a token, so an underbar stands for a space. A backslash makes the
next character literal. One closing quote at the end is optional.

<pre><code>&nbsp;> 'hello_world .
&nbsp;  hello world
&nbsp;> 'snake\_case' .
&nbsp;  snake_case
</code></pre>

## Quotations

Tokens between `{` and `}` are not run. They are collected into a
quotation, which is pushed on to the stack like any other value.
Quotations nest. A quotation spans lines until its braces balance.

<pre><code>&nbsp;> { dup * } .s
&nbsp;  &lt;1&gt; { dup * }
&nbsp;> 7 swap do .
&nbsp;  49
</code></pre>

## Definitions

`define` pops a name and a value. A quotation becomes a new word that runs
the quotation. Any other value becomes a word that pushes the value.

<pre><code>&nbsp;> { dup * } 'square' define
&nbsp;> 5 square .
&nbsp;  25
&nbsp;> 42 'answer' define answer .
&nbsp;  42
</code></pre>

A running quotation gets its own copy of the definitions visible to its
caller. Anything it defines disappears when it returns. Names inside a
quotation are looked up each time it runs, so a word defined earlier in
the same quotation is visible to the rest of it.

<pre><code>&nbsp;> { 1 'x' define x x + } do .
&nbsp;  2
&nbsp;> x
&nbsp;  UNKNOWN TOKEN; x
</code></pre>

## Control flow

`if`, `ifelse`, `while` and `dowhile` test the value under their
quotations without removing it. The flag stays on the stack afterward.

<pre><code>&nbsp;> 5 { dup . 1 - } while .s
&nbsp;  5
&nbsp;  4
&nbsp;  3
&nbsp;  2
&nbsp;  1
&nbsp;  &lt;1&gt; 0
</code></pre>

An error abandons the rest of the line it happened on. The stack keeps
whatever the failing word had already done.
*/
